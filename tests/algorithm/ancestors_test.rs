#[cfg(test)]
mod tests {
    use crate::utils::{TreeBuilder, clan};
    use kinship::algorithm::kinship::{
        ancestor_generations, ancestor_path, ancestor_sibling, nearest_common_ancestor,
    };
    use kinship::{Gender, Side, SiblingType};

    #[test]
    fn test_ancestor_path_sides() {
        let tree = clan().tree();

        let henry = ancestor_path(&tree, "@I11@", "@I03@", 15).unwrap();
        assert_eq!(henry.generation, 2);
        assert_eq!(henry.side, Side::Paternal);
        assert_eq!(henry.lineage_side, Side::Paternal);

        // Liam -> John -> Henry -> Grace: top step is the mother's branch
        let grace = ancestor_path(&tree, "@I11@", "@I02@", 15).unwrap();
        assert_eq!(grace.generation, 3);
        assert_eq!(grace.side, Side::Maternal);
        assert_eq!(grace.lineage_side, Side::Paternal);
    }

    #[test]
    fn test_ancestor_path_respects_bound() {
        let tree = clan().tree();

        assert!(ancestor_path(&tree, "@I11@", "@I03@", 1).is_none());
        assert!(ancestor_path(&tree, "@I16@", "@I01@", 3).is_none());
        assert_eq!(
            ancestor_path(&tree, "@I16@", "@I01@", 4).map(|path| path.generation),
            Some(4)
        );
        // Not one's own ancestor, and descendants are not ancestors
        assert!(ancestor_path(&tree, "@I11@", "@I11@", 15).is_none());
        assert!(ancestor_path(&tree, "@I03@", "@I11@", 15).is_none());
    }

    #[test]
    fn test_ancestor_sibling() {
        let tree = clan().tree();

        let hilda = ancestor_sibling(&tree, "@I16@", "@I05@", 2, 5).unwrap();
        assert_eq!(hilda.generation, 3);
        assert_eq!(hilda.side, Side::Paternal);
        assert_eq!(hilda.ancestor.name, "Henry");
        assert_eq!(hilda.sibling_type, SiblingType::Full);

        // Jane is a sibling of Liam's father, below the starting generation
        assert!(ancestor_sibling(&tree, "@I11@", "@I09@", 2, 5).is_none());
        assert!(ancestor_sibling(&tree, "@I16@", "@I05@", 2, 2).is_none());
    }

    #[test]
    fn test_generation_map() {
        let tree = clan().tree();

        let generations = ancestor_generations(&tree, "@I16@", 8);
        assert_eq!(generations.get("@I16@"), Some(&0));
        assert_eq!(generations.get("@I11@"), Some(&1));
        assert_eq!(generations.get("@I15@"), Some(&1));
        assert_eq!(generations.get("@I07@"), Some(&2));
        assert_eq!(generations.get("@I03@"), Some(&3));
        assert_eq!(generations.get("@I02@"), Some(&4));
        assert_eq!(generations.len(), 9);

        let bounded = ancestor_generations(&tree, "@I16@", 2);
        assert_eq!(bounded.len(), 5);
        assert!(ancestor_generations(&tree, "@I404@", 8).is_empty());
    }

    #[test]
    fn test_generation_map_keeps_shortest_distance() {
        // Pedigree collapse: Kid's father is also the father of Kid's mother
        let tree = TreeBuilder::new()
            .person("@I1@", "Elder", Gender::Male)
            .person("@I2@", "Daughter", Gender::Female)
            .person("@I3@", "Kid", Gender::Male)
            .family("@F1@", Some("@I1@"), None, &["@I2@"])
            .family("@F2@", Some("@I1@"), Some("@I2@"), &["@I3@"])
            .tree();

        let generations = ancestor_generations(&tree, "@I3@", 8);
        assert_eq!(generations.get("@I1@"), Some(&1));
        assert_eq!(generations.get("@I2@"), Some(&1));
    }

    #[test]
    fn test_nearest_common_ancestor_tie_break() {
        let tree = clan().tree();

        // Henry and Irene tie at (3, 2); the smaller id wins
        let common = nearest_common_ancestor(&tree, "@I16@", "@I13@", 8).unwrap();
        assert_eq!(common.ancestor.id, "@I03@");
        assert_eq!((common.gen1, common.gen2), (3, 2));
        assert_eq!(common.total_distance(), 5);

        // An ancestor of the other counts at distance zero
        let direct = nearest_common_ancestor(&tree, "@I11@", "@I07@", 8).unwrap();
        assert_eq!(direct.ancestor.id, "@I07@");
        assert_eq!((direct.gen1, direct.gen2), (1, 0));

        assert!(nearest_common_ancestor(&tree, "@I11@", "@I24@", 8).is_none());
        assert!(nearest_common_ancestor(&tree, "@I16@", "@I13@", 2).is_none());
    }

    #[test]
    fn test_cyclic_data_terminates() {
        let tree = TreeBuilder::new()
            .person("@I1@", "Al", Gender::Male)
            .person("@I2@", "Bo", Gender::Male)
            .family("@F1@", Some("@I2@"), None, &["@I1@"])
            .family("@F2@", Some("@I1@"), None, &["@I2@"])
            .tree();

        assert!(ancestor_path(&tree, "@I1@", "@I404@", 15).is_none());
        assert_eq!(
            ancestor_path(&tree, "@I1@", "@I2@", 15).map(|path| path.generation),
            Some(1)
        );
        assert!(ancestor_sibling(&tree, "@I1@", "@I404@", 2, 5).is_none());
        assert_eq!(ancestor_generations(&tree, "@I1@", 15).len(), 2);
    }
}
