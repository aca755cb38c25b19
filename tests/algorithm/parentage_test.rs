#[cfg(test)]
mod tests {
    use crate::utils::{TreeBuilder, clan};
    use kinship::algorithm::kinship::{children_of, parents_of, spouses_of};
    use kinship::{ChildRelation, Gender, Side, SpouseStatus};

    #[test]
    fn test_parents_round_trip() {
        let tree = clan().tree();

        let parents = parents_of(&tree, "@I11@");
        assert_eq!(parents.father.map(|p| p.name.as_str()), Some("John"));
        assert_eq!(parents.mother.map(|p| p.name.as_str()), Some("Kate"));
        assert_eq!(parents.side_of("@I07@"), Some(Side::Paternal));
        assert_eq!(parents.side_of("@I08@"), Some(Side::Maternal));
        assert!(parents.contains("@I08@"));
        assert!(!parents.contains("@I03@"));
    }

    #[test]
    fn test_only_first_child_family_counts() {
        let tree = clan().tree();

        // Ada was born into @F09@ and adopted into @F05@
        let parents = parents_of(&tree, "@I23@");
        assert_eq!(parents.father.map(|p| p.name.as_str()), Some("Xavier"));
        assert_eq!(parents.mother.map(|p| p.name.as_str()), Some("Yvonne"));
    }

    #[test]
    fn test_structural_gaps_give_unknown_parents() {
        let tree = TreeBuilder::new()
            .person("@I1@", "Solo", Gender::Female)
            .person("@I2@", "Half", Gender::Male)
            .person("@I3@", "Mum", Gender::Female)
            .family("@F1@", None, Some("@I3@"), &["@I2@"])
            .tree();

        let solo = parents_of(&tree, "@I1@");
        assert!(solo.father.is_none() && solo.mother.is_none());

        let half = parents_of(&tree, "@I2@");
        assert!(half.father.is_none());
        assert_eq!(half.mother.map(|p| p.id.as_str()), Some("@I3@"));
        assert_eq!(half.iter().count(), 1);

        let unknown = parents_of(&tree, "@I404@");
        assert_eq!(unknown.on_side(Side::Paternal), None);
        assert_eq!(unknown.on_side(Side::Maternal), None);
    }

    #[test]
    fn test_spouses_across_families() {
        let tree = clan().tree();

        let spouses = spouses_of(&tree, "@I07@");
        let found: Vec<(&str, SpouseStatus)> = spouses
            .iter()
            .map(|spouse| (spouse.individual.name.as_str(), spouse.kind))
            .collect();
        assert_eq!(
            found,
            [("Kate", SpouseStatus::Married), ("Wendy", SpouseStatus::Divorced)]
        );

        // Wendy's own record does not list the family
        assert!(spouses_of(&tree, "@I17@").is_empty());
    }

    #[test]
    fn test_children_keep_relation_flag() {
        let tree = clan().tree();

        let children = children_of(&tree, "@I09@");
        let found: Vec<(&str, ChildRelation)> = children
            .iter()
            .map(|child| (child.individual.name.as_str(), child.kind))
            .collect();
        assert_eq!(
            found,
            [("Mia", ChildRelation::Biological), ("Ada", ChildRelation::Adopted)]
        );

        let henry: Vec<&str> = children_of(&tree, "@I03@").iter().map(|c| c.id()).collect();
        assert_eq!(henry, ["@I07@", "@I09@", "@I22@"]);
    }
}
