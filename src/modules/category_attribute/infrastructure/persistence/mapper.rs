use crate::modules::category_attribute::domain::{CategoryAttribute, CategoryAttributeState};

use super::record::CategoryAttributeRecord;

pub fn to_record(assignment: &CategoryAttribute) -> CategoryAttributeRecord {
    CategoryAttributeRecord {
        id: assignment.id().to_string(),
        version: assignment.version(),
        category_id: assignment.category_id().to_string(),
        attribute_id: assignment.attribute_id().to_string(),
        required: assignment.required(),
        sort_order: assignment.sort_order(),
        filterable: assignment.filterable().as_option(),
        searchable: assignment.searchable().as_option(),
        enabled: assignment.enabled(),
        created_at: assignment.created_at(),
        modified_at: assignment.modified_at(),
    }
}

pub fn to_domain(record: CategoryAttributeRecord) -> CategoryAttribute {
    CategoryAttribute::reconstruct(CategoryAttributeState {
        id: record.id,
        version: record.version,
        category_id: record.category_id,
        attribute_id: record.attribute_id,
        required: record.required,
        sort_order: record.sort_order,
        filterable: record.filterable.into(),
        searchable: record.searchable.into(),
        enabled: record.enabled,
        created_at: record.created_at,
        modified_at: record.modified_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::OverrideFlag;
    use chrono::{TimeZone, Utc};

    fn state() -> CategoryAttributeState {
        CategoryAttributeState {
            id: "assign-1".to_string(),
            version: 1,
            category_id: "tv".to_string(),
            attribute_id: "attr-color".to_string(),
            required: false,
            sort_order: 0,
            filterable: OverrideFlag::Inherit,
            searchable: OverrideFlag::Inherit,
            enabled: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            modified_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_round_trip_over_every_flag_combination() {
        let flags = [
            OverrideFlag::Inherit,
            OverrideFlag::Override(true),
            OverrideFlag::Override(false),
        ];
        for (i, filterable) in flags.into_iter().enumerate() {
            for (j, searchable) in flags.into_iter().enumerate() {
                let assignment = CategoryAttribute::reconstruct(CategoryAttributeState {
                    id: format!("assign-{}-{}", i, j),
                    version: (i * 3 + j) as i32 + 1,
                    category_id: "c".repeat(300),
                    required: i == j,
                    sort_order: (i + j) as i32,
                    filterable,
                    searchable,
                    enabled: i != 2,
                    ..state()
                });
                let record = to_record(&assignment);
                assert_eq!(record.filterable, filterable.as_option());
                assert_eq!(record.searchable, searchable.as_option());
                assert_eq!(to_domain(record), assignment);
            }
        }
    }

    #[test]
    fn test_tri_state_flags_survive_storage() {
        let assignment = CategoryAttribute::reconstruct(CategoryAttributeState {
            id: "assign-7".to_string(),
            version: 7,
            category_id: "tv".to_string(),
            attribute_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            required: true,
            sort_order: 3,
            filterable: OverrideFlag::Override(false),
            searchable: OverrideFlag::Inherit,
            enabled: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            modified_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        });

        let record = to_record(&assignment);
        assert_eq!(record.filterable, Some(false));
        assert_eq!(record.searchable, None);

        assert_eq!(to_domain(record.clone()), assignment);
        assert_eq!(to_record(&to_domain(record.clone())), record);
    }
}
