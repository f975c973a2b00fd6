//! Form and report flow.
//!
//! A [`Planner`] holds the visitor's form and is either waiting for input or
//! showing a report. It moves between the two only through [`Event`]s:
//!
//! ```text
//!   Input --Submit (date present and valid)--> Report
//!   Report --Reset--> Input
//! ```
//!
//! Edits are accepted in either state and never change it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::content::ContentRecord;
use crate::prelude::*;
use crate::{BirthDate, ParseError, Sign};

/// What the visitor typed. Empty strings mean "not given".
///
/// Only `date` feeds the result and only `name` shows up in it. `time` and
/// `place` are accepted and kept but nothing reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub name:  String,
    pub date:  String,
    pub time:  String,
    pub place: String,
}

impl FormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Place => &self.place,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Place => &mut self.place,
        };
        *slot = value.into();
    }

    /// The trimmed name, if one was entered.
    pub fn name(&self) -> Option<&str> {
        Some(self.name.trim()).filter(|name| !name.is_empty())
    }
}

/// A form field the visitor can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
    #[display(fmt = "place")]
    Place,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Date, Self::Time, Self::Place];
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field: {0} (expected name, date, time or place)")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownField(trimmed.to_owned()))
    }
}

/// A resolved report: the sign for the submitted date, its content, and
/// the name to greet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    name:       Option<String>,
    birth_date: BirthDate,
    sign:       Sign,
    record:     &'static ContentRecord,
}

impl Report {
    pub fn new(name: Option<&str>, birth_date: BirthDate) -> Self {
        let sign = birth_date.sign();
        Self {
            name: name.map(str::to_owned),
            birth_date,
            sign,
            record: sign.content(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub const fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub const fn sign(&self) -> Sign {
        self.sign
    }

    pub const fn record(&self) -> &'static ContentRecord {
        self.record
    }

    /// Headline for the report, personalised when a name was given.
    pub fn greeting(&self) -> String {
        match &self.name {
            Some(name) => format!("Hello {name}, you are a {}!", self.sign),
            None => format!("You are a {}!", self.sign),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum State {
    /// Waiting for a valid submission.
    #[default]
    Input,
    /// Showing a resolved report.
    Report(Report),
}

/// Something the visitor did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Edit(Field, String),
    Submit,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The date field was empty. The planner stays where it was.
    #[error("A date of birth is required")]
    MissingDate,

    /// The date field did not hold a calendar date.
    #[error(transparent)]
    InvalidDate(#[from] ParseError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Planner {
    form:  FormInput,
    state: State,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts in the input state with a pre-filled form.
    pub fn with_form(form: FormInput) -> Self {
        Self {
            form,
            state: State::Input,
        }
    }

    pub const fn form(&self) -> &FormInput {
        &self.form
    }

    pub const fn state(&self) -> &State {
        &self.state
    }

    pub const fn report(&self) -> Option<&Report> {
        match &self.state {
            State::Report(report) => Some(report),
            State::Input => None,
        }
    }

    pub const fn is_reporting(&self) -> bool {
        matches!(self.state, State::Report(_))
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        tracing::trace!(%field, "form field edited");
    }

    /// Resolves the form into a report and moves to the report state.
    ///
    /// Submitting again from the report state recomputes from the current form.
    ///
    /// # Errors
    /// `SubmitError::MissingDate` when the date is blank and
    /// `SubmitError::InvalidDate` when it does not parse. Either way the
    /// state is left untouched.
    pub fn submit(&mut self) -> Result<Sign, SubmitError> {
        let date = self.form.date.trim();
        if date.is_empty() {
            tracing::debug!("submit ignored: no date of birth");
            return Err(SubmitError::MissingDate);
        }

        let birth_date = date
            .parse::<BirthDate>()
            .inspect_err(|error| tracing::debug!(%error, "submit rejected"))?;
        let report = Report::new(self.form.name(), birth_date);
        let sign = report.sign();

        tracing::debug!(%birth_date, %sign, "showing report");
        self.state = State::Report(report);
        Ok(sign)
    }

    /// Drops the current report and goes back to input. Form fields are kept.
    pub fn reset(&mut self) {
        if self.is_reporting() {
            tracing::debug!("report cleared");
        }
        self.state = State::Input;
    }

    /// Applies one event.
    ///
    /// # Errors
    /// Only `Event::Submit` can fail; see [`Planner::submit`].
    pub fn handle(&mut self, event: Event) -> Result<(), SubmitError> {
        match event {
            Event::Edit(field, value) => self.edit(field, value),
            Event::Submit => {
                self.submit()?;
            },
            Event::Reset => self.reset(),
        }
        Ok(())
    }
}
