// SPDX-License-Identifier: MPL-2.0
//! Contact section: an info column (email and phone rows that copy to
//! the clipboard, plus decorative social pills) next to the message
//! form. The form mirrors the signup modal's validation flow and keeps
//! its draft on disk between runs.

use crate::app::drafts::ContactDraft;
use crate::domain::submission::{Submission, SubmitStatus, CONTACT_SUCCESS_HOLD};
use crate::domain::validation::{self, Field, FieldError, MESSAGE_MAX_LEN};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_editor, text_input, Column, Container, Row, Text},
    Element, Length,
};

pub const CONTACT_EMAIL: &str = "hello@rofa.ai";
pub const CONTACT_PHONE: &str = "+1 (234) 567-890";

const SOCIAL_NAMES: [&str; 3] = ["Twitter", "LinkedIn", "GitHub"];

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    CopyEmailPressed,
    CopyPhonePressed,
    SubmitPressed,
    /// The simulated send delay elapsed.
    SubmitFinished,
    Tick,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A field changed; the parent persists the draft.
    DraftChanged(ContactDraft),
    /// Copy `value` to the clipboard and toast `toast_key`.
    Copy {
        toast_key: &'static str,
        value: &'static str,
    },
    /// Validation failed on submit.
    InvalidSubmit,
    /// Validation passed; the parent schedules [`Message::SubmitFinished`].
    SubmitStarted,
    /// The message was sent; the parent clears the stored draft.
    Submitted,
}

/// Contact form state.
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: text_editor::Content,
    name_error: Option<FieldError>,
    email_error: Option<FieldError>,
    message_error: Option<FieldError>,
    /// Field currently being edited; validated when editing moves on.
    editing: Option<Field>,
    submission: Submission,
}

impl ContactForm {
    /// Restore a persisted draft into the form fields.
    #[must_use]
    pub fn with_draft(draft: ContactDraft) -> Self {
        Self {
            name: draft.name,
            email: draft.email,
            message: text_editor::Content::with_text(&draft.message),
            ..Self::default()
        }
    }

    /// Whether the form awaits a [`Message::Tick`] to expire its
    /// success hold.
    #[must_use]
    pub fn wants_tick(&self) -> bool {
        self.submission.status() == SubmitStatus::Success
    }

    /// Whether the submit spinner needs animation frames.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission.status() == SubmitStatus::Submitting
    }

    fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.text(),
        }
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
                let body = self.message.text();
                self.message_error = validation::validate(Field::Message, &body);
            }
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
            Message::MessageEdited(action) => {
                let edited = action.is_edit();
                if edited {
                    self.enter_field(Field::Message);
                }
                self.message.perform(action);
                if edited {
                    self.message_error = None;
                    Event::DraftChanged(self.draft())
                } else {
                    Event::None
                }
            }
            Message::CopyEmailPressed => Event::Copy {
                toast_key: "toast-email-copied",
                value: CONTACT_EMAIL,
            },
            Message::CopyPhonePressed => Event::Copy {
                toast_key: "toast-phone-copied",
                value: CONTACT_PHONE,
            },
            Message::SubmitPressed => self.submit(),
            Message::SubmitFinished => {
                // The sent values stay visible through the success hold.
                self.submission.finish(true);
                Event::Submitted
            }
            Message::Tick => {
                // After the hold the fields reset and the button reads
                // "Send Message" again.
                if self.submission.expire_success(CONTACT_SUCCESS_HOLD) {
                    self.name.clear();
                    self.email.clear();
                    self.message = text_editor::Content::new();
                    self.editing = None;
                }
                Event::None
            }
        }
    }

    fn submit(&mut self) -> Event {
        let body = self.message.text();
        self.editing = None;
        self.name_error = validation::validate(Field::Name, &self.name);
        self.email_error = validation::validate(Field::Email, &self.email);
        self.message_error = validation::validate(Field::Message, &body);
        if self.name_error.is_some() || self.email_error.is_some() || self.message_error.is_some()
        {
            return Event::InvalidSubmit;
        }
        if self.submission.begin() {
            Event::SubmitStarted
        } else {
            Event::None
        }
    }

    /// Render the section. `spin_time` feeds the submit spinner.
    pub fn view<'a>(&'a self, i18n: &'a I18n, spin_time: f32) -> Element<'a, Message> {
        let heading = Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG);

        let columns = Row::new()
            .spacing(spacing::XXL)
            .push(self.info_column(i18n))
            .push(self.form_column(i18n, spin_time));

        Column::new()
            .spacing(spacing::XL)
            .padding([spacing::SECTION, spacing::XL])
            .push(heading)
            .push(columns)
            .into()
    }

    fn info_column<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let blurb = Text::new(i18n.tr("contact-blurb"))
            .size(typography::BODY)
            .color(palette::GRAY_400);

        let email_row = copy_row(
            i18n,
            "contact-email-label",
            CONTACT_EMAIL,
            Message::CopyEmailPressed,
        );
        let phone_row = copy_row(
            i18n,
            "contact-phone-label",
            CONTACT_PHONE,
            Message::CopyPhonePressed,
        );

        let mut socials = Row::new().spacing(spacing::SM);
        for name in SOCIAL_NAMES {
            socials = socials.push(
                Container::new(Text::new(name).size(typography::CAPTION))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::container::card),
            );
        }

        Column::new()
            .width(Length::Fill)
            .spacing(spacing::LG)
            .push(blurb)
            .push(email_row)
            .push(phone_row)
            .push(socials)
            .into()
    }

    fn form_column<'a>(&'a self, i18n: &'a I18n, spin_time: f32) -> Element<'a, Message> {
        let name = text_input(&i18n.tr("contact-name-placeholder"), &self.name)
            .on_input(Message::NameChanged)
            .padding(spacing::SM)
            .size(typography::BODY)
            .style(styles::text_input::form(self.name_error.is_some()));

        let email = text_input(&i18n.tr("contact-email-placeholder"), &self.email)
            .on_input(Message::EmailChanged)
            .padding(spacing::SM)
            .size(typography::BODY)
            .style(styles::text_input::form(self.email_error.is_some()));

        let message = text_editor(&self.message)
            .placeholder(i18n.tr("contact-message-placeholder"))
            .on_action(Message::MessageEdited)
            .padding(spacing::SM)
            .size(typography::BODY)
            .height(Length::Fixed(140.0));

        let counter = Text::new(format!(
            "{}/{}",
            self.message.text().trim_end_matches('\n').chars().count(),
            MESSAGE_MAX_LEN
        ))
        .size(typography::CAPTION)
        .color(palette::GRAY_400)
        .width(Length::Fill)
        .align_x(Horizontal::Right);

        let mut form = Column::new().spacing(spacing::MD).width(Length::Fill);
        form = push_with_error(form, name.into(), i18n, Field::Name, self.name_error);
        form = push_with_error(form, email.into(), i18n, Field::Email, self.email_error);
        form = push_with_error(form, message.into(), i18n, Field::Message, self.message_error);
        form.push(counter).push(self.submit_button(i18n, spin_time)).into()
    }

    fn submit_button<'a>(&'a self, i18n: &'a I18n, spin_time: f32) -> Element<'a, Message> {
        let label_key = match self.submission.status() {
            SubmitStatus::Submitting => "contact-submitting",
            SubmitStatus::Success => "contact-submitted",
            SubmitStatus::Idle | SubmitStatus::Failed => "contact-submit",
        };

        let mut content = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr(label_key)).size(typography::BODY));
        if self.is_submitting() {
            content = content.push(Spinner::new(palette::GRAY_400, spin_time).into_element());
        }

        let mut submit = button(
            Container::new(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .padding([spacing::SM, spacing::LG])
        .width(Length::Fill)
        .style(styles::button::primary);
        if self.submission.status().can_submit() {
            submit = submit.on_press(Message::SubmitPressed);
        }
        submit.into()
    }
}

fn copy_row<'a>(
    i18n: &'a I18n,
    label_key: &str,
    value: &'static str,
    on_press: Message,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(label_key))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .push(Text::new(value).size(typography::BODY))
        .push(
            Text::new(i18n.tr("contact-copy-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    button(row)
        .on_press(on_press)
        .padding([spacing::XXS, 0.0])
        .style(styles::button::bare(palette::GRAY_400))
        .into()
}

fn push_with_error<'a>(
    column: Column<'a, Message>,
    input: Element<'a, Message>,
    i18n: &I18n,
    field: Field,
    error: Option<FieldError>,
) -> Column<'a, Message> {
    let mut column = column.push(input);
    if let Some(error) = error {
        column = column.push(
            Text::new(i18n.tr(error.i18n_key(field)))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }
    column
}
