// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language, theme, toast lifetimes and the two playgrounds.
//!
//! The screen edits a draft. Language, theme and durations are applied live
//! through [`Event`]s, but only [`Message::Save`] writes them to disk.

use crate::app::config::{
    Config, DEFAULT_ERROR_DURATION_MS, DEFAULT_NOTIFICATION_DURATION_MS,
    MAX_NOTIFICATION_DURATION_MS, MIN_NOTIFICATION_DURATION_MS, NOTIFICATION_DURATION_STEP_MS,
};
use crate::app::i18n::fluent::I18n;
use crate::ui::components::page_header::page_header;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{DefaultDurations, Kind};
use crate::ui::overlays::Size;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, slider, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Duration;
use unic_langid::LanguageIdentifier;

const MIN_MS: u32 = MIN_NOTIFICATION_DURATION_MS as u32;
const MAX_MS: u32 = MAX_NOTIFICATION_DURATION_MS as u32;
const STEP_MS: u32 = NOTIFICATION_DURATION_STEP_MS as u32;

/// Overlay widths offered by the overlay playground.
const PLAYGROUND_SIZES: [Size; 5] = [
    Size::Small,
    Size::Medium,
    Size::Large,
    Size::ExtraLarge,
    Size::Full,
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub live_notifications: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    DurationChanged(u32),
    ErrorDurationChanged(u32),
    Save,
    Reset,
    Notify(Kind),
    DismissAll,
    OpenOverlay(Size),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    DurationsChanged(DefaultDurations),
    SaveRequested,
    /// Ask the user before restoring defaults.
    ResetRequested,
    Notify(Kind),
    DismissAll,
    OpenOverlay(Size),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    language: LanguageIdentifier,
    theme_mode: ThemeMode,
    duration_ms: u32,
    error_duration_ms: u32,
}

impl State {
    /// Builds the draft from the loaded configuration and the active locale.
    #[must_use]
    pub fn new(config: &Config, language: LanguageIdentifier) -> Self {
        Self {
            language,
            theme_mode: config.general.theme_mode,
            duration_ms: snap(config.notifications.duration_ms),
            error_duration_ms: snap(config.notifications.error_duration_ms),
        }
    }

    #[must_use]
    pub fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn durations(&self) -> DefaultDurations {
        DefaultDurations {
            standard: Duration::from_millis(u64::from(self.duration_ms)),
            error: Duration::from_millis(u64::from(self.error_duration_ms)),
        }
    }

    /// Writes the draft into `config`.
    pub fn apply_to(&self, config: &mut Config) {
        config.general.language = Some(self.language.to_string());
        config.general.theme_mode = self.theme_mode;
        config.notifications.duration_ms = u64::from(self.duration_ms);
        config.notifications.error_duration_ms = u64::from(self.error_duration_ms);
    }

    /// Restores theme and durations to their defaults. The language is kept.
    pub fn reset(&mut self) {
        self.theme_mode = ThemeMode::default();
        self.duration_ms = snap(DEFAULT_NOTIFICATION_DURATION_MS);
        self.error_duration_ms = snap(DEFAULT_ERROR_DURATION_MS);
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(language) => {
                if language == self.language {
                    return Event::None;
                }
                self.language = language.clone();
                Event::LanguageChanged(language)
            }
            Message::ThemeModeSelected(mode) => {
                if mode == self.theme_mode {
                    return Event::None;
                }
                self.theme_mode = mode;
                Event::ThemeModeChanged(mode)
            }
            Message::DurationChanged(ms) => {
                self.duration_ms = snap(u64::from(ms));
                Event::DurationsChanged(self.durations())
            }
            Message::ErrorDurationChanged(ms) => {
                self.error_duration_ms = snap(u64::from(ms));
                Event::DurationsChanged(self.durations())
            }
            Message::Save => Event::SaveRequested,
            Message::Reset => Event::ResetRequested,
            Message::Notify(kind) => Event::Notify(kind),
            Message::DismissAll => Event::DismissAll,
            Message::OpenOverlay(size) => Event::OpenOverlay(size),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let actions = Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new(i18n.tr("settings-reset")).size(typography::BODY_SM))
                    .on_press(Message::Reset)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::secondary),
            )
            .push(
                button(Text::new(i18n.tr("settings-save")).size(typography::BODY_SM))
                    .on_press(Message::Save)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::accent(palette::NEON_GREEN)),
            );

        let header = page_header(
            i18n.tr("settings-title"),
            i18n.tr("settings-subtitle"),
            Some(actions.into()),
        );

        let languages = i18n.available_locales().iter().fold(
            Row::new().spacing(spacing::XS),
            |row, locale| {
                let name = i18n.tr(&format!("language-name-{locale}"));
                let label = if name.starts_with("MISSING:") {
                    locale.to_string()
                } else {
                    name
                };
                row.push(choice(
                    label,
                    *locale == self.language,
                    Message::LanguageSelected(locale.clone()),
                ))
            },
        );

        let themes = ThemeMode::ALL
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, mode| {
                row.push(choice(
                    i18n.tr(mode.i18n_key()),
                    mode == self.theme_mode,
                    Message::ThemeModeSelected(mode),
                ))
            });

        let appearance = section(
            i18n.tr("settings-appearance-title"),
            Column::new()
                .spacing(spacing::MD)
                .push(labelled(i18n.tr("settings-language-label"), languages))
                .push(labelled(i18n.tr("settings-theme-label"), themes)),
        );

        let durations = section(
            i18n.tr("settings-notifications-title"),
            Column::new()
                .spacing(spacing::MD)
                .push(duration_slider(
                    i18n,
                    "settings-duration-label",
                    self.duration_ms,
                    Message::DurationChanged,
                ))
                .push(duration_slider(
                    i18n,
                    "settings-error-duration-label",
                    self.error_duration_ms,
                    Message::ErrorDurationChanged,
                )),
        );

        let kinds = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info]
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, kind| {
                row.push(
                    button(
                        Text::new(format!("{} {}", kind.glyph(), i18n.tr(kind_key(kind))))
                            .size(typography::BODY_SM),
                    )
                    .on_press(Message::Notify(kind))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::accent(kind.color())),
                )
            });

        let dismiss_all = button(Text::new(i18n.tr("settings-dismiss-all")).size(typography::BODY_SM))
            .on_press_maybe((ctx.live_notifications > 0).then_some(Message::DismissAll))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary);

        let toast_playground = section(
            i18n.tr("settings-playground-title"),
            Column::new()
                .spacing(spacing::SM)
                .push(kinds)
                .push(dismiss_all),
        );

        let sizes = PLAYGROUND_SIZES
            .into_iter()
            .fold(Row::new().spacing(spacing::XS), |row, size| {
                row.push(
                    button(Text::new(i18n.tr(size_key(size))).size(typography::BODY_SM))
                        .on_press(Message::OpenOverlay(size))
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::secondary),
                )
            });

        let overlay_playground = section(i18n.tr("settings-overlay-playground-title"), sizes);

        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(appearance)
            .push(durations)
            .push(toast_playground)
            .push(overlay_playground)
            .into()
    }
}

/// Clamps a duration to the slider range and rounds it to the nearest step.
fn snap(ms: u64) -> u32 {
    let clamped = ms.clamp(MIN_NOTIFICATION_DURATION_MS, MAX_NOTIFICATION_DURATION_MS);
    let step = NOTIFICATION_DURATION_STEP_MS;
    let rounded = (clamped + step / 2) / step * step;
    // Bounded by MAX_NOTIFICATION_DURATION_MS, which fits in u32.
    u32::try_from(rounded.min(MAX_NOTIFICATION_DURATION_MS)).unwrap_or(MAX_MS)
}

/// Localization key naming a notification kind.
#[must_use]
pub fn kind_key(kind: Kind) -> &'static str {
    match kind {
        Kind::Success => "notification-kind-success",
        Kind::Error => "notification-kind-error",
        Kind::Warning => "notification-kind-warning",
        Kind::Info => "notification-kind-info",
    }
}

/// Localization key naming an overlay size.
#[must_use]
pub fn size_key(size: Size) -> &'static str {
    match size {
        Size::Small => "overlay-size-small",
        Size::Medium => "overlay-size-medium",
        Size::Large => "overlay-size-large",
        Size::ExtraLarge => "overlay-size-extra-large",
        Size::Full => "overlay-size-full",
    }
}

fn choice<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::nav_item(selected))
        .into()
}

fn labelled<'a>(label: String, control: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(label)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(styles::container::muted_text(theme)),
                }),
        )
        .push(control)
        .into()
}

fn section<'a>(title: String, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(content),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

fn duration_slider<'a>(
    i18n: &I18n,
    label_key: &str,
    value: u32,
    on_change: fn(u32) -> Message,
) -> Element<'a, Message> {
    let seconds = format!("{:.1}", f64::from(value) / 1000.0);
    let value_label = Container::new(
        Text::new(i18n.tr_with_args(
            "settings-duration-value",
            &[("seconds", seconds.as_str())],
        ))
        .size(typography::BODY_SM),
    )
    .width(Length::Fixed(64.0))
    .align_x(alignment::Horizontal::Right);

    let control = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(slider(MIN_MS..=MAX_MS, value, on_change).step(STEP_MS))
        .push(value_label);

    labelled(i18n.tr(label_key), control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unic_langid::langid;

    fn state() -> State {
        State::new(&Config::default(), langid!("en-US"))
    }

    #[test]
    fn new_reads_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Dark;
        config.notifications.duration_ms = 4000;

        let state = State::new(&config, langid!("zh-CN"));
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
        assert_eq!(state.language(), &langid!("zh-CN"));
        assert_eq!(state.durations().standard, Duration::from_millis(4000));
        assert_eq!(state.durations().error, Duration::from_millis(5000));
    }

    #[test]
    fn snap_clamps_and_rounds() {
        assert_eq!(snap(0), MIN_MS);
        assert_eq!(snap(99_999), MAX_MS);
        assert_eq!(snap(3249), 3000);
        assert_eq!(snap(3250), 3500);
    }

    #[test]
    fn duration_change_reports_new_defaults() {
        let mut state = state();
        let event = state.update(Message::ErrorDurationChanged(7000));
        assert_eq!(
            event,
            Event::DurationsChanged(DefaultDurations {
                standard: Duration::from_millis(3000),
                error: Duration::from_millis(7000),
            })
        );
    }

    #[test]
    fn selecting_current_values_is_a_no_op() {
        let mut state = state();
        assert_eq!(
            state.update(Message::LanguageSelected(langid!("en-US"))),
            Event::None
        );
        assert_eq!(
            state.update(Message::ThemeModeSelected(ThemeMode::System)),
            Event::None
        );
        assert_eq!(
            state.update(Message::ThemeModeSelected(ThemeMode::Light)),
            Event::ThemeModeChanged(ThemeMode::Light)
        );
    }

    #[test]
    fn reset_restores_defaults_but_keeps_language() {
        let mut state = State::new(&Config::default(), langid!("zh-CN"));
        state.update(Message::ThemeModeSelected(ThemeMode::Dark));
        state.update(Message::DurationChanged(9000));
        state.reset();

        assert_eq!(state.theme_mode(), ThemeMode::System);
        assert_eq!(state.durations(), DefaultDurations::default());
        assert_eq!(state.language(), &langid!("zh-CN"));
    }

    #[test]
    fn apply_to_writes_every_field() {
        let mut state = state();
        state.update(Message::LanguageSelected(langid!("zh-CN")));
        state.update(Message::DurationChanged(2500));

        let mut config = Config::default();
        state.apply_to(&mut config);
        assert_eq!(config.general.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.notifications.duration_ms, 2500);
    }

    #[test]
    fn playground_buttons_forward_events() {
        let mut state = state();
        assert_eq!(state.update(Message::Notify(Kind::Warning)), Event::Notify(Kind::Warning));
        assert_eq!(state.update(Message::DismissAll), Event::DismissAll);
        assert_eq!(
            state.update(Message::OpenOverlay(Size::Large)),
            Event::OpenOverlay(Size::Large)
        );
        assert_eq!(state.update(Message::Reset), Event::ResetRequested);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let state = state();
        let _ = state.view(ViewContext {
            i18n: &i18n,
            live_notifications: 0,
        });
    }
}
