use log::trace;

use crate::error::Result;
use crate::fortran::Value;
use crate::{Element, Keyword};

use super::formats;

/// Decode the two lines common to every element record
///
/// ```text
/// (A4,A16,F12.6,4E16.9,A19,E16.9)  KEYWORD NAME v0 v1 v2 v3 v9 NOTE v11
/// (5E16.9)                         v4 v5 v6 v7 v8
/// ```
///
/// The numbered values make up the 12-slot data vector (slot 10 being the
/// note) that the keyword layout picks parameters from. A blank keyword is a
/// placeholder record and nothing beyond the name is read.
pub(crate) fn element(first: &str, second: &str) -> Result<Element> {
    let mut first = formats().element.read(first)?.into_iter();
    let second = formats().e5.read(second)?;

    let tag = text(first.next());
    let name = text(first.next()).trim().to_string();

    if tag.trim().is_empty() {
        trace!("Placeholder record {name:?}");
        return Ok(Element {
            name,
            ..Default::default()
        });
    }

    let keyword: Keyword = tag.parse()?;
    trace!("{keyword} {name}");

    // line 1 values 2-5, all of line 2, then line 1 values 6-8
    let leading: Vec<Value> = first.by_ref().take(4).collect();
    let slots: Vec<Value> = leading.into_iter().chain(second).chain(first).collect();

    let mut element = Element {
        keyword: Some(keyword),
        name,
        ..Default::default()
    };

    for (parameter, slot) in keyword.layout() {
        element.set(*parameter, &slots[*slot]);
    }

    Ok(element)
}

fn text(value: Option<Value>) -> String {
    match value {
        Some(Value::Text(text)) => text,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::Parameter;

    /// Fortran-ish `E16.9`
    fn sci(value: f64) -> String {
        format!("{:>16}", format!("{value:.9E}"))
    }

    /// Build the two record lines from a 12-slot data vector
    fn record_lines(tag: &str, name: &str, slots: &[f64; 12], note: &str) -> (String, String) {
        let first = format!(
            "{tag:<4}{name:<16}{:12.6}{}{}{}{}{note:<19}{}",
            slots[0],
            sci(slots[1]),
            sci(slots[2]),
            sci(slots[3]),
            sci(slots[9]),
            sci(slots[11]),
        );
        let second: String = slots[4..9].iter().map(|v| sci(*v)).collect();
        (first, second)
    }

    fn distinct_slots() -> [f64; 12] {
        let mut slots = [0.0; 12];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = (i as f64 + 1.0) * 0.125;
        }
        slots
    }

    #[test]
    fn drift_record() {
        let first = "DRIFD1                  1.500000 0.000000000E+00 0.000000000E+00 0.000000000E+00 0.100000000E-01                    0.500000000E+01";
        let second = " 0.000000000E+00 0.000000000E+00 0.000000000E+00 0.000000000E+00 0.000000000E+00";
        let element = element(first, second).unwrap();

        assert_eq!(element.keyword, Some(Keyword::Drift));
        assert_eq!(element.name, "D1");
        assert_eq!(element.l, 1.5);
        assert_eq!(element.aper, 0.01);
        assert_eq!(element.e, 5.0);
        assert_eq!(element.note, "");
    }

    #[test]
    fn layout_round_trip() {
        let slots = distinct_slots();

        for keyword in Keyword::ALL {
            let (first, second) = record_lines(keyword.as_str(), "ELEMENT", &slots, "a note");
            let element = element(&first, &second).unwrap();
            let layout = keyword.layout();

            assert_eq!(element.keyword, Some(keyword));
            assert_eq!(element.name, "ELEMENT");

            for parameter in Parameter::ALL {
                let slot = layout.iter().find(|(p, _)| *p == parameter).map(|(_, s)| *s);
                match (parameter, slot) {
                    (Parameter::Note, Some(_)) => assert_eq!(element.note, "a note"),
                    (Parameter::Note, None) => assert_eq!(element.note, ""),
                    (p, Some(s)) => assert_eq!(element.numeric(p), Some(slots[s]), "{keyword} {p}"),
                    (p, None) => assert_eq!(element.numeric(p), Some(0.0), "{keyword} {p}"),
                }
            }
        }
    }

    #[test]
    fn blank_keyword_skips_layout() {
        let (first, second) = record_lines("", "START", &distinct_slots(), "ignored");
        let element = element(&first, &second).unwrap();

        assert_eq!(element.keyword, None);
        assert_eq!(element.name, "START");
        assert_eq!(element.note, "");
        for parameter in Parameter::ALL {
            if parameter != Parameter::Note {
                assert_eq!(element.numeric(parameter), Some(0.0));
            }
        }
    }

    #[test]
    fn unknown_keyword_is_fatal() {
        let (first, second) = record_lines("WIGG", "W1", &distinct_slots(), "");
        assert!(matches!(
            element(&first, &second),
            Err(Error::UnknownKeyword(tag)) if tag == "WIGG"
        ));
    }

    #[test]
    fn short_second_line_is_fatal() {
        let (first, _) = record_lines("QUAD", "QF", &distinct_slots(), "");
        assert!(matches!(
            element(&first, " 0.100000000E+01"),
            Err(Error::LineTooShort { .. })
        ));
    }
}
