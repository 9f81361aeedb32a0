//! Interactive prompt and sample batch over any reader/writer pair.

use std::io::{self, BufRead, Write};

use crate::pipeline::vitals::extract_vitals;

pub const PROMPT: &str = "Enter medical text (or type 'quit' to exit): ";
pub const QUIT_COMMAND: &str = "quit";
pub const NO_VITALS_MESSAGE: &str = "No vitals found in the text.";

/// Notes run through the extractor after the interactive session ends.
pub const SAMPLE_NOTES: [&str; 7] = [
    "Patient presents with a temperature of 38.5 degrees Celsius, a heart rate of 100 bpm, and blood pressure of 130/85 mm Hg.",
    "The patient's blood pressure is 120/80 mm Hg, and their heartrate is 85 beats per minute. No fever noted.",
    "Temp: 98.6 F, BP: 118/78, HR: 72",
    "hello my name is doctor rosh. patient name is rahul gandhi how can we. the temprature of the human subject is 105 degree ferhenite and a and bloos pressure is 120 88",
    "y blood pressure is 120 80",
    "bp is 120 80",
    "my name is anushi mangal and my age is 40 years i am suffering from fever. doctor says temprature is 105 degree and rate is 77 bpm with bp as 200 over 100",
];

/// Prompt for notes until `quit` (any case) or end of input.
/// Returns the number of notes processed.
pub fn run_interactive<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<usize> {
    let mut processed = 0;
    let mut line = String::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            tracing::debug!("End of input, leaving interactive session");
            break;
        }

        let text = line.trim_end_matches(['\r', '\n']);
        if text.eq_ignore_ascii_case(QUIT_COMMAND) {
            break;
        }

        let vitals = extract_vitals(text);
        processed += 1;
        if vitals.is_empty() {
            writeln!(out, "{NO_VITALS_MESSAGE}")?;
        } else {
            writeln!(out, "Vitals extracted from text: {vitals}")?;
        }
    }

    tracing::info!(processed, "Interactive session ended");
    Ok(processed)
}

/// Print every sample note with the vitals extracted from it.
pub fn run_batch<W: Write>(notes: &[&str], out: &mut W) -> io::Result<()> {
    for text in notes {
        let vitals = extract_vitals(text);
        writeln!(out, "Text: '{text}'\nVitals: {vitals}\n")?;
    }
    out.flush()
}
