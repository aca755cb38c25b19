#[cfg(test)]
mod tests {
    use crate::utils::{TreeBuilder, clan};
    use kinship::algorithm::kinship::siblings_of;
    use kinship::{Gender, SiblingType};

    fn sibling_summary(tree: &kinship::FamilyTree, id: &str) -> Vec<(String, SiblingType)> {
        siblings_of(tree, id)
            .into_iter()
            .map(|sibling| (sibling.individual.name.clone(), sibling.kind))
            .collect()
    }

    #[test]
    fn test_full_and_paternal_half_siblings() {
        let tree = clan().tree();

        assert_eq!(
            sibling_summary(&tree, "@I11@"),
            [
                ("Lucy".to_string(), SiblingType::Full),
                ("Tom".to_string(), SiblingType::PaternalHalf),
            ]
        );
        assert_eq!(
            sibling_summary(&tree, "@I18@"),
            [
                ("Liam".to_string(), SiblingType::PaternalHalf),
                ("Lucy".to_string(), SiblingType::PaternalHalf),
            ]
        );
    }

    #[test]
    fn test_maternal_half_siblings() {
        let tree = clan().tree();

        assert_eq!(
            sibling_summary(&tree, "@I16@"),
            [("Zoe".to_string(), SiblingType::MaternalHalf)]
        );
        assert_eq!(
            sibling_summary(&tree, "@I20@"),
            [("Sam".to_string(), SiblingType::MaternalHalf)]
        );
    }

    #[test]
    fn test_adopted_co_child() {
        let tree = clan().tree();

        assert_eq!(
            sibling_summary(&tree, "@I13@"),
            [("Ada".to_string(), SiblingType::Adopted)]
        );
    }

    #[test]
    fn test_adopted_through_other_family() {
        let tree = TreeBuilder::new()
            .person("@I1@", "Dad", Gender::Male)
            .person("@I2@", "Mum", Gender::Female)
            .person("@I3@", "Step", Gender::Female)
            .person("@I4@", "Kid", Gender::Male)
            .person("@I5@", "Foundling", Gender::Female)
            .family("@F1@", Some("@I1@"), Some("@I2@"), &["@I4@"])
            .family("@F2@", Some("@I1@"), Some("@I3@"), &[])
            .adopt("@F2@", "@I5@")
            .tree();

        assert_eq!(
            sibling_summary(&tree, "@I4@"),
            [("Foundling".to_string(), SiblingType::AdoptedPaternal)]
        );
    }

    #[test]
    fn test_merge_keeps_strongest_classification() {
        // Bo is a co-child of the shared family and also listed in the
        // father's second family.
        let tree = TreeBuilder::new()
            .person("@I1@", "Dad", Gender::Male)
            .person("@I2@", "Mum", Gender::Female)
            .person("@I3@", "Other", Gender::Female)
            .person("@I4@", "Al", Gender::Male)
            .person("@I5@", "bo", Gender::Male)
            .person("@I6@", "Cy", Gender::Male)
            .family("@F1@", Some("@I1@"), Some("@I2@"), &["@I4@", "@I5@"])
            .family("@F2@", Some("@I1@"), Some("@I3@"), &["@I5@", "@I6@"])
            .tree();

        // Sorted case-insensitively: "bo" before "Cy"
        assert_eq!(
            sibling_summary(&tree, "@I4@"),
            [
                ("bo".to_string(), SiblingType::Full),
                ("Cy".to_string(), SiblingType::PaternalHalf),
            ]
        );
    }

    /// Ada is born into F9 and adopted into Kid's family F1
    fn adopted_into_kids_family() -> TreeBuilder {
        TreeBuilder::new()
            .person("@I1@", "Dad", Gender::Male)
            .person("@I2@", "Mum", Gender::Female)
            .person("@I3@", "Kid", Gender::Male)
            .person("@I4@", "Ada", Gender::Female)
            .person("@I5@", "Xavier", Gender::Male)
            .person("@I6@", "Yvonne", Gender::Female)
            .person("@I7@", "Other", Gender::Unknown)
            .family("@F9@", Some("@I5@"), Some("@I6@"), &["@I4@"])
            .family("@F1@", Some("@I1@"), Some("@I2@"), &["@I3@"])
            .adopt("@F1@", "@I4@")
    }

    #[test]
    fn test_paternal_half_beats_adopted() {
        let tree = adopted_into_kids_family()
            .family("@F2@", Some("@I1@"), Some("@I7@"), &["@I4@"])
            .tree();

        assert_eq!(
            sibling_summary(&tree, "@I3@"),
            [("Ada".to_string(), SiblingType::PaternalHalf)]
        );
    }

    #[test]
    fn test_maternal_half_beats_adopted() {
        let tree = adopted_into_kids_family()
            .family("@F3@", Some("@I7@"), Some("@I2@"), &["@I4@"])
            .tree();

        assert_eq!(
            sibling_summary(&tree, "@I3@"),
            [("Ada".to_string(), SiblingType::MaternalHalf)]
        );
    }

    #[test]
    fn test_maternal_half_beats_adopted_maternal() {
        // Kid's only link to Ada runs through the mother's later families
        let tree = TreeBuilder::new()
            .person("@I1@", "Dad", Gender::Male)
            .person("@I2@", "Mum", Gender::Female)
            .person("@I3@", "Kid", Gender::Male)
            .person("@I4@", "Ada", Gender::Female)
            .person("@I7@", "Other", Gender::Male)
            .person("@I8@", "Another", Gender::Male)
            .family("@F1@", Some("@I1@"), Some("@I2@"), &["@I3@"])
            .family("@F3@", Some("@I7@"), Some("@I2@"), &[])
            .adopt("@F3@", "@I4@")
            .family("@F4@", Some("@I8@"), Some("@I2@"), &["@I4@"])
            .tree();

        assert_eq!(
            sibling_summary(&tree, "@I3@"),
            [("Ada".to_string(), SiblingType::MaternalHalf)]
        );
    }

    #[test]
    fn test_no_child_family_means_no_siblings() {
        let tree = clan().tree();
        assert!(siblings_of(&tree, "@I01@").is_empty());
        assert!(siblings_of(&tree, "@I404@").is_empty());
    }
}
