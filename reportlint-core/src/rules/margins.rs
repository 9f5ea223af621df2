use super::StyleRule;
use crate::config::StyleConfig;
use crate::types::{Document, Violation};

/// Checks the four page margins of every section against the canonical
/// values. Section-level findings carry no run reference and no highlight
/// side effect — there is no run to color.
pub struct MarginRule<'a> {
    config: &'a StyleConfig,
}

impl<'a> MarginRule<'a> {
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }
}

/// Round to two decimals. Margin comparisons deliberately use rounding
/// followed by exact equality instead of the tolerance comparison the
/// indent checks use — the boundary behavior differs and both are kept.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl<'a> StyleRule for MarginRule<'a> {
    fn check(&self, document: &mut Document) -> Vec<Violation> {
        let mut violations = Vec::new();
        let expected = &self.config.margins;

        for (index, section) in document.sections.iter().enumerate() {
            let section_label = format!("Section {}", index + 1);
            let checks = [
                ("Top", section.top_margin_cm, expected.top_cm),
                ("Bottom", section.bottom_margin_cm, expected.bottom_cm),
                ("Left", section.left_margin_cm, expected.left_cm),
                ("Right", section.right_margin_cm, expected.right_cm),
            ];

            for (side, actual, canonical) in checks {
                if round2(actual) != canonical {
                    violations.push(Violation::new(
                        None,
                        section_label.clone(),
                        format!(
                            "{} margin should be {} cm (found {:.2} cm)",
                            side, canonical, actual
                        ),
                    ));
                }
            }
        }

        violations
    }

    fn name(&self) -> &str {
        "MarginRule"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_boundaries() {
        assert_eq!(round2(2.004), 2.0);
        assert_eq!(round2(2.006), 2.01);
        assert_eq!(round2(1.91), 1.91);
    }
}
