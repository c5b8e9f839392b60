use crate::error::{Result, SwapError};
use crate::models::{name_key, FoodRecord};

/// Immutable, ordered table of foods. Groups are implicit in each record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodDataset {
    records: Vec<FoodRecord>,
}

impl FoodDataset {
    /// Create a dataset from records, preserving their order.
    pub fn new(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    /// Distinct group names, in order of first appearance.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for record in &self.records {
            if !groups.contains(&record.group.as_str()) {
                groups.push(&record.group);
            }
        }
        groups
    }

    /// Records of `group`, in dataset order. Group matching is exact.
    pub fn foods_in_group(&self, group: &str) -> Vec<&FoodRecord> {
        self.records.iter().filter(|r| r.group == group).collect()
    }

    /// Find a food by name (case-insensitive). First match in dataset order.
    pub fn find(&self, name: &str) -> Option<&FoodRecord> {
        let key = name_key(name);
        self.records.iter().find(|r| r.key() == key)
    }

    /// Find a food by name within a group (case-insensitive).
    pub fn find_in_group(&self, group: &str, name: &str) -> Option<&FoodRecord> {
        let key = name_key(name);
        self.records
            .iter()
            .find(|r| r.group == group && r.key() == key)
    }

    /// Like [`find`](Self::find), but fails with `FoodNotFound`.
    pub fn require(&self, name: &str) -> Result<&FoodRecord> {
        self.find(name)
            .ok_or_else(|| SwapError::FoodNotFound(name.trim().to_string()))
    }

    /// Foods in `group` other than `excluded`: the valid substitution targets.
    pub fn substitutes_for<'a>(&'a self, excluded: &FoodRecord) -> Vec<&'a FoodRecord> {
        let key = excluded.key();
        self.records
            .iter()
            .filter(|r| r.group == excluded.group && r.key() != key)
            .collect()
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Distinct group names of `dataset`.
pub fn groups_of(dataset: &FoodDataset) -> Vec<&str> {
    dataset.groups()
}

/// Records of `group` in dataset order.
pub fn foods_in_group<'a>(dataset: &'a FoodDataset, group: &str) -> Vec<&'a FoodRecord> {
    dataset.foods_in_group(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> FoodDataset {
        FoodDataset::new(vec![
            FoodRecord::new("Rice", "Grains", 130.0),
            FoodRecord::new("Chicken", "Proteins", 165.0),
            FoodRecord::new("Potato", "Grains", 77.0),
            FoodRecord::new("Egg", "Proteins", 155.0),
            FoodRecord::new("Oats", "Grains", 389.0),
        ])
    }

    #[test]
    fn test_groups_first_appearance_order() {
        let dataset = sample_dataset();
        assert_eq!(dataset.groups(), vec!["Grains", "Proteins"]);
        assert_eq!(groups_of(&dataset), dataset.groups());
    }

    #[test]
    fn test_foods_in_group_keeps_order() {
        let dataset = sample_dataset();
        let names: Vec<&str> = foods_in_group(&dataset, "Grains")
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rice", "Potato", "Oats"]);
        assert!(dataset.foods_in_group("Fruits").is_empty());
    }

    #[test]
    fn test_find_case_insensitive() {
        let dataset = sample_dataset();
        assert!(dataset.find("rice").is_some());
        assert!(dataset.find(" POTATO ").is_some());
        assert!(dataset.find("banana").is_none());
        assert!(dataset.find_in_group("Proteins", "rice").is_none());
        assert!(dataset.find_in_group("Grains", "rice").is_some());
    }

    #[test]
    fn test_require_reports_missing_name() {
        let dataset = sample_dataset();
        match dataset.require("Banana") {
            Err(SwapError::FoodNotFound(name)) => assert_eq!(name, "Banana"),
            other => panic!("expected FoodNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_substitutes_exclude_source_and_other_groups() {
        let dataset = sample_dataset();
        let rice = dataset.find("Rice").unwrap();
        let names: Vec<&str> = dataset
            .substitutes_for(rice)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Potato", "Oats"]);
    }
}
