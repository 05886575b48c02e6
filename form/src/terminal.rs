//! Terminal front-end for the lead form
//!
//! Prompts for each field, shows field errors under the form, prints the
//! busy line while the request is in flight, and renders the success panel.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::error::FormError;
use crate::form::{LeadForm, Notice, Submitter};
use crate::schema::{Field, FieldErrors, LeadInput};

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask for one field. An empty answer keeps the current value.
    ///
    /// Returns `None` once input is exhausted.
    pub fn prompt(&mut self, field: Field, current: &str) -> io::Result<Option<String>> {
        if let Some(options) = field.options() {
            writeln!(self.output, "{}:", field.label())?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "  {}) {}", i + 1, option)?;
            }
        }

        let marker = if field.is_required() { " *" } else { "" };
        if current.is_empty() {
            write!(self.output, "{}{}: ", field.label(), marker)?;
        } else {
            write!(self.output, "{}{} [{}]: ", field.label(), marker, current)?;
        }
        self.output.flush()?;

        let Some(answer) = self.read_line()? else {
            return Ok(None);
        };
        let answer = answer.trim();

        if answer.is_empty() {
            return Ok(Some(current.to_string()));
        }

        // Select fields take a list number as shorthand
        if let Some(options) = field.options() {
            if let Ok(n) = answer.parse::<usize>() {
                if (1..=options.len()).contains(&n) {
                    return Ok(Some(options[n - 1].to_string()));
                }
            }
        }

        Ok(Some(answer.to_string()))
    }

    /// Walk every field in order. Returns false if input ran out.
    pub fn fill(&mut self, input: &mut LeadInput) -> io::Result<bool> {
        for field in Field::ALL {
            match self.prompt(field, input.get(field))? {
                Some(value) => input.set(field, value),
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{} [y/N]: ", question)?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }

    pub fn show_errors(&mut self, errors: &FieldErrors) -> io::Result<()> {
        for (field, message) in errors.iter() {
            writeln!(self.output, "  ! {}: {}", field.label(), message)?;
        }
        Ok(())
    }

    pub fn show_busy(&mut self) -> io::Result<()> {
        writeln!(self.output, "Submitting...")?;
        self.output.flush()
    }

    pub fn show_notice(&mut self, notice: Notice) -> io::Result<()> {
        writeln!(self.output, "{} {}", notice.title(), notice.description())
    }

    pub fn show_success(&mut self, reference: Option<&str>) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Thank you!")?;
        writeln!(
            self.output,
            "We've received your information and will reach out soon."
        )?;
        if let Some(reference) = reference {
            writeln!(self.output, "Reference: {}", reference)?;
        }
        Ok(())
    }

    /// Run one submit click: validate, show the busy line, deliver, report.
    ///
    /// Returns true when the form reached the success state.
    pub async fn submit_once<S: Submitter>(&mut self, form: &mut LeadForm<S>) -> Result<bool> {
        let payload = match form.begin_submit() {
            Ok(payload) => payload,
            Err(FormError::Schema(_)) => {
                self.show_errors(form.errors())?;
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        self.show_busy()?;
        let result = form.submitter().submit(&payload).await;
        let delivered = form.finish_submit(result).is_ok();

        if let Some(notice) = form.notice() {
            self.show_notice(notice)?;
        }
        if delivered {
            self.show_success(form.reference())?;
        }
        Ok(delivered)
    }

    /// Interactive session: fill, submit, and offer another round.
    ///
    /// Returns the number of leads delivered.
    pub async fn run<S: Submitter>(&mut self, form: &mut LeadForm<S>) -> Result<usize> {
        let mut delivered = 0;

        loop {
            if !self.fill(form.input_mut())? {
                return Ok(delivered);
            }

            if self.submit_once(form).await? {
                delivered += 1;
                if !self.confirm("Submit another?")? {
                    return Ok(delivered);
                }
                form.submit_another();
            } else if form.notice() == Some(Notice::Failure) && !self.confirm("Try again?")? {
                return Ok(delivered);
            }
        }
    }
}
