use super::messages::Message;
use super::state::{
    App, CLOSE_LABEL, DAY_MODE_LABEL, FOOTER_LABEL, MUTE_LABEL, NEXT_LABEL, NIGHT_MODE_LABEL,
    PAUSE_LABEL, PLAY_LABEL, PREVIOUS_LABEL, SCANNER_BUTTON_LABEL, SCANNER_PREVIEW_PX,
    SCANNER_TITLE, SCANNER_WAITING, SHARE_BUTTON_LABEL, SHARE_HINT, SHARE_TITLE, UNMUTE_LABEL,
    VERSE_LABEL,
};
use crate::config::ThemeMode;
use crate::qr::QR_IMAGE_SIZE_PX;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::{Shaping, Wrapping};
use iced::widget::{
    Column, button, center, column, container, horizontal_space, image, mouse_area, opaque, row,
    stack, text,
};
use iced::{Color, Element, Length};

fn filled(color: Color) -> container::Style {
    container::Style {
        background: Some(color.into()),
        ..container::Style::default()
    }
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.ui_theme();
        let verse = self.current_verse();

        let header = row![
            text(self.config.headline.as_str()).size(26.0),
            horizontal_space(),
            button(self.theme_button_label()).on_press(Message::ToggleTheme),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let verse_card = column![
            text(format!(
                "{} · {VERSE_LABEL} {}",
                verse.surah, verse.verse_number
            ))
            .size(18.0),
            text(verse.arabic.as_str())
                .size(30.0)
                .shaping(Shaping::Advanced)
                .wrapping(Wrapping::Word)
                .align_x(Horizontal::Right)
                .width(Length::Fill),
            text(verse.french.as_str())
                .size(18.0)
                .wrapping(Wrapping::Word)
                .width(Length::Fill),
            text(format!(
                "{} / {}",
                self.playback.current + 1,
                self.verse_count()
            ))
            .size(14.0),
        ]
        .spacing(16)
        .width(Length::Fill);

        let play_label = if self.playback.playing {
            PAUSE_LABEL
        } else {
            PLAY_LABEL
        };
        let mute_label = if self.playback.muted {
            UNMUTE_LABEL
        } else {
            MUTE_LABEL
        };
        let controls = row![
            button(PREVIOUS_LABEL).on_press(Message::PreviousVerse),
            button(play_label).on_press(Message::TogglePlayPause),
            button(NEXT_LABEL).on_press(Message::NextVerse),
            button(mute_label).on_press(Message::ToggleMute),
            horizontal_space(),
            button(SHARE_BUTTON_LABEL).on_press(Message::ToggleShareCode),
            button(SCANNER_BUTTON_LABEL).on_press(Message::OpenScanner),
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill);

        let page: Column<'_, Message> = column![
            header,
            container(verse_card)
                .padding(20)
                .width(Length::Fill)
                .height(Length::Fill),
            controls,
            container(text(FOOTER_LABEL).size(12.0)).center_x(Length::Fill),
        ]
        .padding(16)
        .spacing(16)
        .height(Length::Fill);

        let backdrop = palette.backdrop();
        let base: Element<'_, Message> = container(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &iced::Theme| filled(backdrop))
            .into();

        if self.scanner.visible {
            self.overlay(base, self.scanner_panel(), Message::CloseScanner)
        } else if self.share.visible {
            self.overlay(base, self.share_panel(), Message::CloseShareCode)
        } else {
            base
        }
    }
}

impl App {
    /// The theme button names the mode it switches to.
    fn theme_button_label(&self) -> &'static str {
        if matches!(self.theme, ThemeMode::Night) {
            DAY_MODE_LABEL
        } else {
            NIGHT_MODE_LABEL
        }
    }

    fn share_panel(&self) -> Element<'_, Message> {
        let size = QR_IMAGE_SIZE_PX as f32;
        let code: Element<'_, Message> = match &self.share.image {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .into(),
            None => horizontal_space().width(Length::Fixed(size)).into(),
        };

        column![
            text(SHARE_TITLE).size(20.0),
            code,
            text(SHARE_HINT).size(14.0),
            text(self.share.url.as_str()).size(12.0),
            button(CLOSE_LABEL).on_press(Message::CloseShareCode),
        ]
        .spacing(12)
        .align_x(Horizontal::Center)
        .into()
    }

    fn scanner_panel(&self) -> Element<'_, Message> {
        let status = match &self.scanner.error {
            Some(error) => text(error.as_str()).color(self.ui_theme().error_text()),
            None => text(SCANNER_WAITING),
        };

        let feed: Element<'_, Message> = match &self.scanner.preview {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(SCANNER_PREVIEW_PX))
                .height(Length::Fixed(SCANNER_PREVIEW_PX))
                .into(),
            None => horizontal_space().width(Length::Fixed(SCANNER_PREVIEW_PX)).into(),
        };

        column![
            text(SCANNER_TITLE).size(20.0),
            feed,
            status.size(14.0),
            button(CLOSE_LABEL).on_press(Message::CloseScanner),
        ]
        .spacing(12)
        .align_x(Horizontal::Center)
        .into()
    }

    /// Modal layered over `base`; clicking the scrim sends `on_blur`.
    fn overlay<'a>(
        &self,
        base: Element<'a, Message>,
        panel: Element<'a, Message>,
        on_blur: Message,
    ) -> Element<'a, Message> {
        let scrim = self.ui_theme().scrim();
        let card = container(panel)
            .padding(24)
            .style(|theme: &iced::Theme| filled(theme.palette().background));

        stack![
            base,
            opaque(
                mouse_area(
                    center(opaque(card))
                        .style(move |_theme: &iced::Theme| filled(scrim))
                )
                .on_press(on_blur)
            )
        ]
        .into()
    }
}
