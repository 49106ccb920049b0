use crate::{solution, violation};
use std::fmt;

/// Which of the two crafting designs to demonstrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Violation,
    Solution,
}

impl Variant {
    /// Runs the variant's demonstration and returns one rendered line per production.
    pub fn run(self) -> Vec<String> {
        match self {
            Self::Violation => violation::demonstrate()
                .iter()
                .map(violation::Production::render)
                .collect(),
            Self::Solution => solution::demonstrate()
                .iter()
                .map(solution::Production::render)
                .collect(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Violation => write!(f, "violation"),
            Self::Solution => write!(f, "solution"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::DESCRIPTION_PREFIX;

    #[test]
    fn test_display() {
        assert_eq!(Variant::Violation.to_string(), "violation");
        assert_eq!(Variant::Solution.to_string(), "solution");
    }

    #[test]
    fn test_variants_render_identically_for_equivalent_input() {
        let violating = violation::Factory::new();
        let conforming = solution::Factory::new();

        let craftables: Vec<Box<dyn solution::Craftable>> =
            vec![Box::new(solution::Wood), Box::new(solution::Wood)];
        assert_eq!(
            violating.craft_wood([violation::Wood, violation::Wood]).render(),
            conforming.craft(craftables).render()
        );

        let craftables: Vec<Box<dyn solution::Craftable>> =
            vec![Box::new(solution::Metal), Box::new(solution::Metal)];
        assert_eq!(
            violating.craft_metal([violation::Metal, violation::Metal]).render(),
            conforming.craft(craftables).render()
        );
    }

    #[test]
    fn test_mixed_collection_matches_separate_productions() {
        let violating = violation::Factory::new();
        let wood = violating.craft_wood([violation::Wood, violation::Wood]).render();
        let metal = violating.craft_metal([violation::Metal, violation::Metal]).render();

        let craftables: Vec<Box<dyn solution::Craftable>> = vec![
            Box::new(solution::Wood),
            Box::new(solution::Wood),
            Box::new(solution::Metal),
            Box::new(solution::Metal),
        ];
        let mixed = solution::Factory::new().craft(craftables).render();

        assert_eq!(mixed, "Object is composed of\n:\tWood\tWood\tMetal\tMetal");
        assert_eq!(mixed, format!("{}{}", wood, &metal[DESCRIPTION_PREFIX.len()..]));
    }

    #[test]
    fn test_run_violation_then_solution() {
        let mut lines = Variant::Violation.run();
        lines.extend(Variant::Solution.run());

        assert_eq!(
            lines,
            [
                "Object is composed of\n:\tWood\tWood",
                "Object is composed of\n:\tMetal\tMetal",
                "Object is composed of\n:\tWood\tMetal",
            ]
        );
    }
}
