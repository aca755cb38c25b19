#[cfg(test)]
mod tests {
    use crate::utils::clan;
    use kinship::{ChildRelation, SiblingType, SpouseStatus, get_relatives};

    fn names<'a>(people: impl IntoIterator<Item = &'a kinship::Individual>) -> Vec<&'a str> {
        people.into_iter().map(|person| person.name.as_str()).collect()
    }

    #[test]
    fn test_lineage_contents() {
        let tree = clan().tree();
        let lineage = get_relatives(&tree, "@I11@");

        assert_eq!(names(lineage.parents.iter().copied()), ["John", "Kate"]);
        assert_eq!(
            names(lineage.paternal_grandparents.iter().copied()),
            ["Henry", "Irene"]
        );
        assert!(lineage.maternal_grandparents.is_empty());

        let siblings: Vec<(&str, SiblingType)> = lineage
            .siblings
            .iter()
            .map(|sibling| (sibling.individual.name.as_str(), sibling.kind))
            .collect();
        assert_eq!(
            siblings,
            [("Lucy", SiblingType::Full), ("Tom", SiblingType::PaternalHalf)]
        );

        assert_eq!(lineage.spouses.len(), 1);
        assert_eq!(lineage.spouses[0].individual.name, "Rose");
        assert_eq!(lineage.spouses[0].kind, SpouseStatus::Married);

        assert_eq!(lineage.children.len(), 1);
        assert_eq!(lineage.children[0].id(), "@I16@");
        assert_eq!(lineage.children[0].kind, ChildRelation::Biological);
    }

    #[test]
    fn test_lineage_adopted_child() {
        let tree = clan().tree();
        let lineage = get_relatives(&tree, "@I10@");

        let children: Vec<(&str, ChildRelation)> = lineage
            .children
            .iter()
            .map(|child| (child.individual.name.as_str(), child.kind))
            .collect();
        assert_eq!(
            children,
            [("Mia", ChildRelation::Biological), ("Ada", ChildRelation::Adopted)]
        );
        assert!(lineage.parents.is_empty());
    }

    #[test]
    fn test_shared_grandparent() {
        let tree = clan().tree();
        let liam = get_relatives(&tree, "@I11@");
        let mia = get_relatives(&tree, "@I13@");
        let sam = get_relatives(&tree, "@I16@");

        assert_eq!(liam.shared_grandparent(&mia).map(|gp| gp.name.as_str()), Some("Henry"));
        assert!(sam.shared_grandparent(&mia).is_none());
    }

    #[test]
    fn test_unknown_id_has_empty_lineage() {
        let tree = clan().tree();
        let lineage = get_relatives(&tree, "@I404@");
        assert!(lineage.is_empty());
        assert!(lineage.paternal_grandparents.is_empty());
        assert_eq!(lineage.grandparents().count(), 0);
    }

    #[test]
    fn test_lineage_json_keys() -> anyhow::Result<()> {
        let tree = clan().tree();
        let value = serde_json::to_value(get_relatives(&tree, "@I11@"))?;

        assert_eq!(value["Parents"][0]["name"], "John");
        assert_eq!(value["Paternal Grandparents"][1]["name"], "Irene");
        assert_eq!(value["Maternal Grandparents"], serde_json::json!([]));
        assert_eq!(value["Siblings"][1]["individual"]["name"], "Tom");
        assert_eq!(value["Siblings"][1]["kind"], "PaternalHalf");
        assert_eq!(value["Spouse"][0]["kind"], "Married");
        assert_eq!(value["Children"][0]["kind"], "biological");
        Ok(())
    }
}
