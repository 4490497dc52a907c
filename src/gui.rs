use iced::{
    Element, Length, Task, Color, Alignment, Border,
};
use iced::widget::{
    Column, Row, Container, Text, Button, PickList, TextInput, Scrollable, Space, rule,
};

use crate::dictionary;
use crate::history::HistoryStore;
use crate::models::*;
use tokio::task;

const IPA_PLACEHOLDER: &str = "IPA transcription will appear here.";

#[derive(Debug, Clone, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone)]
pub enum Message {
    WordChanged(String),
    LookupWord,
    LookupComplete(Result<HistoryRecord, String>),
    LanguageSelected(Language),
    RemoveRecord(HistoryRecord),
    ClearHistory,
    ToggleHistory,
    ToggleTheme,
}

pub struct Word2ipaApp {
    // UI state
    word_input: String,
    language: Language,
    status_message: String,
    displayed_ipa: Option<String>,
    is_looking_up: bool,
    show_history: bool,
    theme: Theme,

    // past lookups
    history: HistoryStore,
}

impl Word2ipaApp {
    pub fn new() -> (Self, Task<Message>) {
        let history = HistoryStore::open(HistoryStore::default_path());
        (
            Word2ipaApp {
                word_input: String::new(),
                language: Language::EnUs,
                status_message: String::new(),
                displayed_ipa: None,
                is_looking_up: false,
                show_history: false,
                theme: Theme::Light,
                history,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WordChanged(s) => {
                self.word_input = s;
            }
            Message::LookupWord => {
                let word = self.word_input.trim().to_string();
                if word.is_empty() || self.is_looking_up {
                    return Task::none();
                }
                println!("Looking up {:?} in {}", word, self.language.code());
                self.status_message = "Looking up...".to_string();
                self.is_looking_up = true;
                let lang = self.language;
                return Task::perform(async move {
                    let looked: Result<(String, Option<String>), anyhow::Error> =
                        task::spawn_blocking(move || {
                            let ipa = dictionary::lookup(lang, &word)?;
                            Ok((word, ipa))
                        }).await.unwrap();
                    match looked {
                        Ok((word, Some(ipa))) => Ok(HistoryRecord::new(word, ipa, lang)),
                        Ok((word, None)) => {
                            Err(format!("'{}' is not in the {} dictionary", word, lang.code()))
                        }
                        Err(e) => Err(format!("Dictionary error: {:?}", e)),
                    }
                }, Message::LookupComplete);
            }
            Message::LookupComplete(result) => {
                self.is_looking_up = false;
                match result {
                    Ok(rec) => {
                        println!("Found {:?} -> {:?}", rec.word, rec.ipa);
                        self.displayed_ipa = Some(rec.ipa.clone());
                        self.status_message = format!("Found in {}", rec.lang.name());
                        if let Err(e) = self.history.append(rec) {
                            eprintln!("error: failed to save history: {}", e);
                        }
                    }
                    Err(e) => {
                        println!("Lookup miss: {}", e);
                        // Keep the placeholder on a miss; only the status line changes.
                        self.displayed_ipa = None;
                        self.status_message = e;
                    }
                }
            }
            Message::LanguageSelected(lang) => {
                self.language = lang;
            }
            Message::RemoveRecord(rec) => {
                if let Err(e) = self.history.remove(&rec) {
                    eprintln!("error: failed to save history: {}", e);
                }
            }
            Message::ClearHistory => {
                if let Err(e) = self.history.clear() {
                    eprintln!("error: failed to save history: {}", e);
                }
            }
            Message::ToggleHistory => {
                self.show_history = !self.show_history;
            }
            Message::ToggleTheme => {
                self.theme = match self.theme {
                    Theme::Light => Theme::Dark,
                    Theme::Dark => Theme::Light,
                };
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = self.view_sidebar();
        let main_content = self.view_lookup();

        let layout = Row::new()
            .push(sidebar)
            .push(rule::Rule::vertical(1))
            .push(main_content);

        let bg_color = self.bg_color();
        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(bg_color)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_sidebar(&self) -> Element<'_, Message> {
        let accent = self.accent_color();
        let text_color = self.text_color();
        let secondary_text = self.secondary_text_color();

        let title = Text::new("word2ipa")
            .size(28)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(accent),
                }
            });

        let subtitle = Text::new("Word to IPA Transcriber")
            .size(14)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(secondary_text),
                }
            });

        let divider = rule::Rule::horizontal(1);

        let lang_label = Text::new("Dictionary Language")
            .size(16)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(text_color),
                }
            });
        let lang_picker = PickList::new(
            Language::all(),
            Some(self.language),
            Message::LanguageSelected,
        )
        .padding(10)
        .width(Length::Fill);

        let tertiary_text = self.tertiary_text_color();
        let lang_desc = Text::new(self.get_language_description())
            .size(12)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(tertiary_text),
                }
            });

        let theme_btn = Button::new(
            Text::new(match self.theme {
                Theme::Light => "🌙 Dark Mode",
                Theme::Dark => "☀️ Light Mode",
            })
                .size(14)
        )
        .on_press(Message::ToggleTheme)
        .padding(10)
        .width(Length::Fill);

        let history_btn = Button::new(
            Text::new(if self.show_history { "Hide History" } else { "Show History" })
                .size(14)
        )
        .on_press(Message::ToggleHistory)
        .padding(10)
        .width(Length::Fill);

        let mut sidebar_content = Column::new()
            .padding(20)
            .spacing(20)
            .width(Length::Fixed(300.0))
            .push(title)
            .push(subtitle)
            .push(Space::with_height(10))
            .push(divider)
            .push(Space::with_height(10))
            .push(lang_label)
            .push(lang_picker)
            .push(lang_desc)
            .push(Space::with_height(20))
            .push(theme_btn)
            .push(history_btn);

        if self.show_history {
            sidebar_content = sidebar_content
                .push(Space::with_height(10))
                .push(rule::Rule::horizontal(1))
                .push(Space::with_height(10))
                .push(Text::new("Past Lookups").size(14))
                .push(self.view_history_list());
        }

        let sidebar_bg = self.sidebar_bg_color();
        Container::new(sidebar_content)
            .height(Length::Fill)
            .style(move |_theme| {
                iced::widget::container::Style {
                    background: Some(iced::Background::Color(sidebar_bg)),
                    border: Border::default(),
                    ..Default::default()
                }
            })
            .into()
    }

    fn view_history_list(&self) -> Element<'_, Message> {
        let secondary_text = self.secondary_text_color();

        if self.history.is_empty() {
            return Text::new("No lookups yet")
                .size(12)
                .style(move |_theme| {
                    iced::widget::text::Style {
                        color: Some(secondary_text),
                    }
                })
                .into();
        }

        let text_color = self.text_color();
        let accent = self.accent_color();

        let mut history_list = Column::new().spacing(8);
        let count = self.history.len();
        for (i, r) in self.history.records().iter().enumerate() {
            let remove_btn = Button::new(Text::new("✕").size(12))
                .on_press(Message::RemoveRecord(r.clone()))
                .padding(6);

            let entry = Column::new()
                .spacing(4)
                .width(Length::Fill)
                .push(
                    Text::new(&r.ipa)
                        .size(14)
                        .style(move |_theme| {
                            iced::widget::text::Style {
                                color: Some(accent),
                            }
                        })
                )
                .push(
                    Text::new(&r.word)
                        .size(12)
                        .style(move |_theme| {
                            iced::widget::text::Style {
                                color: Some(text_color),
                            }
                        })
                )
                .push(
                    Text::new(format!(
                        "{} · {}",
                        r.lang.code(),
                        r.timestamp.format("%m/%d %H:%M")
                    ))
                        .size(10)
                        .style(|_theme| {
                            iced::widget::text::Style {
                                color: Some(Color::from_rgb(0.5, 0.5, 0.5)),
                            }
                        })
                );

            let row = Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(entry)
                .push(remove_btn);

            history_list = history_list.push(row);
            if i + 1 < count {
                history_list = history_list.push(rule::Rule::horizontal(1));
            }
        }

        let clear_btn = Button::new(Text::new("Clear History").size(12))
            .on_press(Message::ClearHistory)
            .padding(8)
            .width(Length::Fill);

        Column::new()
            .spacing(10)
            .push(Scrollable::new(history_list).height(Length::Fixed(260.0)))
            .push(clear_btn)
            .into()
    }

    fn view_lookup(&self) -> Element<'_, Message> {
        let text_color = self.text_color();
        let secondary_text = self.secondary_text_color();
        let container_bg = self.container_bg_color();
        let border_color = self.border_color();

        let title = Text::new("Look Up a Word")
            .size(32)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(text_color),
                }
            });

        let description = Text::new(format!(
            "Type a word and press Enter to find its {} transcription",
            self.language.name()
        ))
            .size(16)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(secondary_text),
                }
            });

        let word_input = TextInput::new("e.g. hello", &self.word_input)
            .on_input(Message::WordChanged)
            .on_submit(Message::LookupWord)
            .padding(15)
            .size(18)
            .width(Length::Fill);

        let lookup_btn = if self.is_looking_up {
            Button::new(Text::new("Looking up...").size(16))
                .padding(15)
                .width(Length::Fixed(200.0))
        } else {
            Button::new(Text::new("Look Up").size(16))
                .on_press(Message::LookupWord)
                .padding(15)
                .width(Length::Fixed(200.0))
        };

        let (ipa_text, ipa_color) = match &self.displayed_ipa {
            Some(ipa) => (ipa.as_str(), self.accent_color()),
            None => (IPA_PLACEHOLDER, self.tertiary_text_color()),
        };
        let result_box = Container::new(
            Text::new(ipa_text)
                .size(28)
                .style(move |_theme| {
                    iced::widget::text::Style {
                        color: Some(ipa_color),
                    }
                })
        )
        .padding(20)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(move |_theme| {
            iced::widget::container::Style {
                background: Some(iced::Background::Color(container_bg)),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        });

        let status = Text::new(&self.status_message)
            .size(14)
            .style(move |_theme| {
                iced::widget::text::Style {
                    color: Some(secondary_text),
                }
            });

        let content = Column::new()
            .padding(40)
            .spacing(30)
            .width(Length::Fill)
            .push(title)
            .push(description)
            .push(Space::with_height(10))
            .push(word_input)
            .push(lookup_btn)
            .push(Space::with_height(20))
            .push(result_box)
            .push(status);

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn get_language_description(&self) -> &'static str {
        match self.language {
            Language::EnUs => "General American English transcriptions",
            Language::FrFr => "Metropolitan French transcriptions",
            Language::DeDe => "Standard German transcriptions",
            Language::EsEs => "European Spanish transcriptions",
        }
    }

    // Theme color helpers
    fn bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(1.0, 1.0, 1.0),
            Theme::Dark => Color::from_rgb(0.11, 0.11, 0.13),
        }
    }

    fn sidebar_bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.95, 0.95, 0.97),
            Theme::Dark => Color::from_rgb(0.15, 0.15, 0.17),
        }
    }

    fn text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.1, 0.1, 0.1),
            Theme::Dark => Color::from_rgb(0.9, 0.9, 0.9),
        }
    }

    fn secondary_text_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.4, 0.4, 0.4),
            Theme::Dark => Color::from_rgb(0.6, 0.6, 0.6),
        }
    }

    fn tertiary_text_color(&self) -> Color {
        Color::from_rgb(0.5, 0.5, 0.5)
    }

    fn container_bg_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.95, 0.95, 0.95),
            Theme::Dark => Color::from_rgb(0.2, 0.2, 0.22),
        }
    }

    fn border_color(&self) -> Color {
        match self.theme {
            Theme::Light => Color::from_rgb(0.8, 0.8, 0.8),
            Theme::Dark => Color::from_rgb(0.3, 0.3, 0.32),
        }
    }

    fn accent_color(&self) -> Color {
        Color::from_rgb(0.2, 0.5, 0.8)
    }
}
