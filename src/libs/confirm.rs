//! Confirmation before destructive operations.
//!
//! Deleting and clearing tasks ask a [`Confirm`] implementation first. A
//! `false` answer aborts the operation with no state change.

use dialoguer::theme::ColorfulTheme;

pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool, dialoguer::Error>;
}

/// Asks on the terminal, defaulting to "no".
pub struct DialogConfirm;

impl Confirm for DialogConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool, dialoguer::Error> {
        dialoguer::Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
    }
}

/// Answers yes without asking (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, dialoguer::Error> {
        Ok(true)
    }
}

/// Declines every prompt.
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, dialoguer::Error> {
        Ok(false)
    }
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> Result<bool, dialoguer::Error> {
        Ok(self(prompt))
    }
}

/// Picks the terminal prompt or an automatic yes.
pub fn confirmer(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(DialogConfirm)
    }
}
