//! Conversions between the `person` row and its wire representations.

use super::models::{Person, PersonVo, PersonVoV2};

impl From<Person> for PersonVo {
    fn from(person: Person) -> Self {
        Self {
            key: person.id,
            address: person.address,
            first_name: person.first_name,
            last_name: person.last_name,
            gender: person.gender,
            enabled: person.enabled,
            links: Vec::new(),
        }
    }
}

impl From<PersonVo> for Person {
    fn from(vo: PersonVo) -> Self {
        Self {
            id: vo.key,
            first_name: vo.first_name,
            last_name: vo.last_name,
            address: vo.address,
            gender: vo.gender,
            enabled: vo.enabled,
        }
    }
}

// Birth day is not stored.
impl From<Person> for PersonVoV2 {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            first_name: person.first_name,
            last_name: person.last_name,
            birth_day: None,
            address: person.address,
            gender: person.gender,
        }
    }
}

impl From<PersonVoV2> for Person {
    fn from(vo: PersonVoV2) -> Self {
        Self {
            id: vo.id,
            first_name: vo.first_name,
            last_name: vo.last_name,
            address: vo.address,
            gender: vo.gender,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::map_list;
    use chrono::NaiveDate;

    fn person(id: i64) -> Person {
        Person {
            id,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            address: format!("Address {}", id),
            gender: if id % 2 == 0 { "Male" } else { "Female" }.to_string(),
            enabled: true,
        }
    }

    #[test]
    fn entity_to_vo_moves_id_into_key() {
        let vo = PersonVo::from(person(3));
        assert_eq!(vo.key, 3);
        assert_eq!(vo.first_name, "First 3");
        assert_eq!(vo.gender, "Female");
        assert!(vo.links.is_empty());
    }

    #[test]
    fn vo_to_entity_keeps_every_field() {
        let mut vo = PersonVo::from(person(8));
        vo.enabled = false;
        let entity = Person::from(vo);
        assert_eq!(entity.id, 8);
        assert_eq!(entity.address, "Address 8");
        assert!(!entity.enabled);
    }

    #[test]
    fn list_mapping_preserves_order() {
        let vos: Vec<PersonVo> = map_list((0..5).map(person).collect());
        let keys: Vec<i64> = vos.iter().map(|vo| vo.key).collect();
        assert_eq!(keys, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn v2_birth_day_is_dropped() {
        let vo = PersonVoV2 {
            id: 0,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth_day: NaiveDate::from_ymd_opt(1815, 12, 10),
            address: "London".to_string(),
            gender: "Female".to_string(),
        };
        let entity = Person::from(vo);
        assert!(entity.enabled);
        assert_eq!(PersonVoV2::from(entity).birth_day, None);
    }
}
