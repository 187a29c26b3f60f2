// SPDX-License-Identifier: MPL-2.0
//! Account signup modal.
//!
//! A centered card over a dimmed backdrop with name, email, and password
//! fields. The password row carries a four-segment strength meter, one
//! segment per criterion (length, lowercase, uppercase, digit). Name and
//! email survive restarts through [`SignupDraft`]; the password never
//! leaves memory.

use crate::app::drafts::SignupDraft;
use crate::domain::submission::{Submission, SubmitStatus, SIGNUP_SUCCESS_HOLD};
use crate::domain::validation::{self, Field, FieldError, PASSWORD_MIN_LEN};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, mouse_area, text_input, Column, Container, Row, Space, Text},
    Color, Element, Length,
};

/// Per-criterion verdicts for the strength meter, in display order:
/// minimum length, lowercase, uppercase, digit.
#[must_use]
pub fn password_criteria(password: &str) -> [bool; 4] {
    [
        password.chars().count() >= PASSWORD_MIN_LEN,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
    ]
}

/// Number of criteria the password meets, 0 to 4.
#[must_use]
pub fn strength_score(password: &str) -> usize {
    password_criteria(password).iter().filter(|met| **met).count()
}

/// Meter color for a given score. Unmet segments stay neutral.
#[must_use]
pub fn strength_color(score: usize) -> Color {
    match score {
        0 | 1 => palette::STRENGTH_1,
        2 => palette::STRENGTH_2,
        3 => palette::STRENGTH_3,
        _ => palette::STRENGTH_4,
    }
}

/// Messages handled by the modal.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ToggleReveal,
    ClosePressed,
    BackdropPressed,
    SubmitPressed,
    /// The simulated account-creation delay elapsed.
    SubmitFinished,
    Tick,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Name or email changed; the parent persists the draft.
    DraftChanged(SignupDraft),
    /// Validation failed on submit.
    InvalidSubmit,
    /// Validation passed; the parent schedules [`Message::SubmitFinished`].
    SubmitStarted,
    /// The account was created; the parent clears the stored draft.
    Submitted,
    /// The modal closed itself after the success hold.
    Closed,
}

/// Signup form state. Lives for the whole application so field values
/// survive closing and reopening the modal.
#[derive(Debug, Default)]
pub struct SignupModal {
    open: bool,
    name: String,
    email: String,
    password: String,
    reveal_password: bool,
    name_error: Option<FieldError>,
    email_error: Option<FieldError>,
    password_error: Option<FieldError>,
    /// Field currently being edited; validated when editing moves on.
    editing: Option<Field>,
    submission: Submission,
}

impl SignupModal {
    /// Restore a persisted draft into the form fields.
    #[must_use]
    pub fn with_draft(draft: SignupDraft) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the modal awaits a [`Message::Tick`] to expire its
    /// success hold.
    #[must_use]
    pub fn wants_tick(&self) -> bool {
        self.open && self.submission.status() == SubmitStatus::Success
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close without submitting. Cancelling resets the fields and tells
    /// the parent to discard the persisted draft; a submit in flight is
    /// left to finish.
    pub fn request_close(&mut self) -> Event {
        if self.submission.status() == SubmitStatus::Submitting {
            return Event::None;
        }
        self.open = false;
        self.reveal_password = false;
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.clear_errors();
        Event::Closed
    }

    fn clear_errors(&mut self) {
        self.name_error = None;
        self.email_error = None;
        self.password_error = None;
        self.editing = None;
    }

    /// Validates the field being left when editing moves to another
    /// one, standing in for a blur event.
    fn enter_field(&mut self, entered: Field) {
        if let Some(left) = self.editing {
            if left != entered {
                self.validate_field(left);
            }
        }
        self.editing = Some(entered);
    }

    fn validate_field(&mut self, field: Field) {
        match field {
            Field::Name => self.name_error = validation::validate(Field::Name, &self.name),
            Field::Email => self.email_error = validation::validate(Field::Email, &self.email),
            _ => {
                self.password_error = validation::validate(Field::Password, &self.password);
            }
        }
    }

    fn draft(&self) -> SignupDraft {
        SignupDraft {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.enter_field(Field::Name);
                self.name = value;
                self.name_error = None;
                Event::DraftChanged(self.draft())
            }
            Message::EmailChanged(value) => {
                self.enter_field(Field::Email);
                self.email = value;
                self.email_error = None;
                Event::DraftChanged(self.draft())
            }
            Message::PasswordChanged(value) => {
                self.enter_field(Field::Password);
                self.password = value;
                self.password_error = None;
                Event::None
            }
            Message::ToggleReveal => {
                self.reveal_password = !self.reveal_password;
                Event::None
            }
            Message::ClosePressed | Message::BackdropPressed => self.request_close(),
            Message::SubmitPressed => self.submit(),
            Message::SubmitFinished => {
                self.submission.finish(true);
                self.password.clear();
                self.name.clear();
                self.email.clear();
                Event::Submitted
            }
            Message::Tick => {
                if self.submission.expire_success(SIGNUP_SUCCESS_HOLD) {
                    self.open = false;
                    self.reveal_password = false;
                    Event::Closed
                } else {
                    Event::None
                }
            }
        }
    }

    fn submit(&mut self) -> Event {
        self.editing = None;
        self.name_error = validation::validate(Field::Name, &self.name);
        self.email_error = validation::validate(Field::Email, &self.email);
        self.password_error = validation::validate(Field::Password, &self.password);
        if self.name_error.is_some() || self.email_error.is_some() || self.password_error.is_some()
        {
            return Event::InvalidSubmit;
        }
        if self.submission.begin() {
            Event::SubmitStarted
        } else {
            Event::None
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let heading = Row::new()
            .align_y(Vertical::Top)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(Text::new(i18n.tr("signup-title")).size(typography::TITLE_LG))
                    .push(
                        Text::new(i18n.tr("signup-subtitle"))
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_400),
                    ),
            )
            .push(
                button(Text::new("\u{2715}").size(typography::BODY))
                    .on_press(Message::ClosePressed)
                    .padding(spacing::XXS)
                    .style(styles::button::bare(palette::GRAY_400)),
            );

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(self.field_row(
                i18n,
                "signup-name-label",
                "signup-name-placeholder",
                &self.name,
                Message::NameChanged,
                Field::Name,
                self.name_error,
            ))
            .push(self.field_row(
                i18n,
                "signup-email-label",
                "signup-email-placeholder",
                &self.email,
                Message::EmailChanged,
                Field::Email,
                self.email_error,
            ))
            .push(self.password_row(i18n));

        form = form.push(self.submit_button(i18n)).push(
            Text::new(i18n.tr("signup-terms"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

        let card = Container::new(form)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::XL)
            .style(styles::container::modal);

        // Clicks on the card must not fall through to the backdrop.
        let card = mouse_area(card);

        let backdrop = Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::modal_backdrop);

        mouse_area(backdrop)
            .on_press(Message::BackdropPressed)
            .into()
    }

    fn field_row<'a>(
        &'a self,
        i18n: &'a I18n,
        label_key: &str,
        placeholder_key: &str,
        value: &'a str,
        on_input: fn(String) -> Message,
        field: Field,
        error: Option<FieldError>,
    ) -> Element<'a, Message> {
        let input = text_input(&i18n.tr(placeholder_key), value)
            .on_input(on_input)
            .padding(spacing::SM)
            .size(typography::BODY)
            .style(styles::text_input::form(error.is_some()));

        let mut column = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(i18n.tr(label_key))
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
            .push(input);

        if let Some(error) = error {
            column = column.push(
                Text::new(i18n.tr(error.i18n_key(field)))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        }
        column.into()
    }

    fn password_row<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let input = text_input(&i18n.tr("signup-password-placeholder"), &self.password)
            .on_input(Message::PasswordChanged)
            .secure(!self.reveal_password)
            .padding(spacing::SM)
            .size(typography::BODY)
            .style(styles::text_input::form(self.password_error.is_some()));

        let reveal_key = if self.reveal_password {
            "signup-hide-password"
        } else {
            "signup-show-password"
        };
        let reveal = button(Text::new(i18n.tr(reveal_key)).size(typography::CAPTION))
            .on_press(Message::ToggleReveal)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::bare(palette::GRAY_400));

        let mut column = Column::new()
            .spacing(spacing::XXS)
            .push(
                Row::new()
                    .align_y(Vertical::Center)
                    .push(
                        Text::new(i18n.tr("signup-password-label"))
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_400)
                            .width(Length::Fill),
                    )
                    .push(reveal),
            )
            .push(input);

        if let Some(error) = self.password_error {
            column = column.push(
                Text::new(i18n.tr(error.i18n_key(Field::Password)))
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            );
        } else if !self.password.is_empty() {
            column = column
                .push(self.strength_meter())
                .push(
                    Text::new(i18n.tr("signup-password-hint"))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                );
        }
        column.into()
    }

    fn strength_meter(&self) -> Element<'_, Message> {
        let criteria = password_criteria(&self.password);
        let filled = strength_color(strength_score(&self.password));

        let mut segments = Row::new().spacing(spacing::XXS);
        for met in criteria {
            let color = if met { filled } else { palette::GRAY_300 };
            segments = segments.push(
                container(
                    Space::new()
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::STRENGTH_SEGMENT_HEIGHT)),
                )
                .width(Length::Fill)
                .style(styles::container::filled(color)),
            );
        }
        segments.into()
    }

    fn submit_button<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let label_key = match self.submission.status() {
            SubmitStatus::Submitting => "signup-submitting",
            SubmitStatus::Success => "signup-submitted",
            SubmitStatus::Idle | SubmitStatus::Failed => "signup-submit",
        };
        let label = Text::new(i18n.tr(label_key))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        let mut submit = button(label)
            .padding([spacing::SM, spacing::LG])
            .width(Length::Fill)
            .style(styles::button::primary);
        if self.submission.status().can_submit() {
            submit = submit.on_press(Message::SubmitPressed);
        }
        submit.into()
    }
}
