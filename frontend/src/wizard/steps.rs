//! Wizard steps and their Danish copy.

use coverreg_shared::Field;

// =============================================================================
// Messages
// =============================================================================

pub const MSG_CONTACT_NAME: &str = "Indtast dit fulde navn.";
pub const MSG_CONTACT_EMAIL: &str = "Indtast en gyldig e-mailadresse.";
pub const MSG_RECORDING_ID: &str = "ISRC skal indeholde præcis 12 cifre uden mellemrum.";
pub const MSG_ARTIST_NAME: &str = "Indtast dit artistnavn.";
pub const MSG_ORIGINAL_LINK: &str = "Linket skal starte med http:// eller https://.";

/// Banner shown when the original work could not be looked up.
pub const MSG_LOOKUP_FAILED: &str = "Originalværket er ikke tilgængeligt endnu. Prøv igen om lidt.";

/// Banner shown when the registration could not be sent.
pub const MSG_SUBMISSION_FAILED: &str =
    "Det lykkedes ikke at sende data. Tjek din forbindelse og prøv igen.";

// =============================================================================
// Step
// =============================================================================

/// One page of the registration wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Contact = 1,
    Recording = 2,
    OriginalWork = 3,
}

impl Step {
    pub const FIRST: Step = Step::Contact;
    pub const LAST: Step = Step::OriginalWork;

    /// 1-based position in the wizard.
    pub fn number(self) -> usize {
        self as usize
    }

    pub fn from_number(number: usize) -> Option<Step> {
        match number {
            1 => Some(Step::Contact),
            2 => Some(Step::Recording),
            3 => Some(Step::OriginalWork),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Step> {
        Step::from_number(self.number() + 1)
    }

    /// Previous step, floored at the first one.
    pub fn previous(self) -> Step {
        Step::from_number(self.number().saturating_sub(1)).unwrap_or(Step::FIRST)
    }

    pub fn is_last(self) -> bool {
        self == Step::LAST
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Contact => "Kontaktoplysninger",
            Step::Recording => "Oplysninger om dit covernummer",
            Step::OriginalWork => "Oplysninger om originalværket",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Step::Contact => {
                "Vi bruger oplysningerne til at kontakte dig angående din registrering, hvis det bliver nødvendigt."
            }
            Step::Recording => {
                "Indtast ISRC og kunstnernavn præcis som registreret hos din digitale distributør."
            }
            Step::OriginalWork => {
                "Bekræft at du har valgt det rigtige værk, og hjælp os med et link til originalen."
            }
        }
    }

    /// Fields edited on this step, in display order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Step::Contact => &[Field::ContactName, Field::ContactEmail],
            Step::Recording => &[Field::RecordingId, Field::ArtistName],
            Step::OriginalWork => &[Field::OriginalLink],
        }
    }

    /// Label of the primary button.
    pub fn advance_label(self) -> &'static str {
        if self.is_last() {
            "Send"
        } else {
            "Næste"
        }
    }
}

// =============================================================================
// Field copy
// =============================================================================

/// Presentation data for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub hint: Option<&'static str>,
    pub required: bool,
    pub input_type: &'static str,
}

pub fn field_copy(field: Field) -> FieldCopy {
    match field {
        Field::ContactName => FieldCopy {
            label: "Navn",
            placeholder: "Fornavn Efternavn",
            hint: None,
            required: true,
            input_type: "text",
        },
        Field::ContactEmail => FieldCopy {
            label: "E-mailadresse",
            placeholder: "mail@mail.dk",
            hint: None,
            required: true,
            input_type: "email",
        },
        Field::RecordingId => FieldCopy {
            label: "ISRC",
            placeholder: "ex. 123456789000",
            hint: Some(
                "ISRC står for International Standard Recording Code. Det er en 12-cifret kode, der identificerer hvert enkelt track på en udgivelse.",
            ),
            required: true,
            input_type: "text",
        },
        Field::ArtistName => FieldCopy {
            label: "Dit artistnavn",
            placeholder: "ex. The Beatles",
            hint: None,
            required: true,
            input_type: "text",
        },
        Field::OriginalLink => FieldCopy {
            label: "Indsæt et link til originalværket (valgfrit)",
            placeholder: "ex. https://www.youtube.com/watch?v=NrgmdOz227I",
            hint: Some(
                "Hjælp os med at sikre, at du har valgt det rigtige originalværk ved at indsætte et link fra Youtube, Spotify eller en anden tjeneste.",
            ),
            required: false,
            input_type: "url",
        },
    }
}
