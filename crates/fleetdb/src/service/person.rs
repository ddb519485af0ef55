use crate::{
    db::Db,
    entity::{Admin, Person, PersonRecord},
    service::ServiceError,
};
use fleetdb_core::{
    grid::{GridRequest, GridResponse},
    traits::EntityValue,
    types::{Id, Timestamp},
};
use serde::{Deserialize, Serialize};

///
/// PersonDraft
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PersonDraft {
    pub name: String,
    pub age: u32,
    pub admin: Option<Id<Admin>>,
}

///
/// PersonShort
/// Id-and-name projection for pickers and autocomplete.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PersonShort {
    pub id: Id<Person>,
    pub name: String,
}

///
/// PersonService
///

pub struct PersonService<'a> {
    db: &'a mut Db,
}

impl<'a> PersonService<'a> {
    #[must_use]
    pub const fn new(db: &'a mut Db) -> Self {
        Self { db }
    }

    pub fn create(&mut self, draft: PersonDraft) -> Result<Id<Person>, ServiceError> {
        self.check_admin(draft.admin)?;

        let id = self.db.persons.allocate_id();
        self.db.persons.upsert(Person {
            id,
            name: draft.name,
            age: draft.age,
            created_at: Timestamp::now(),
            admin: draft.admin,
        });

        Ok(id)
    }

    pub fn update(&mut self, id: Id<Person>, draft: PersonDraft) -> Result<(), ServiceError> {
        let created_at = self
            .db
            .persons
            .get(id)
            .ok_or(ServiceError::PersonNotFound(id))?
            .created_at;
        self.check_admin(draft.admin)?;

        self.db.persons.upsert(Person {
            id,
            name: draft.name,
            age: draft.age,
            created_at,
            admin: draft.admin,
        });

        Ok(())
    }

    pub fn get(&self, id: Id<Person>) -> Result<&Person, ServiceError> {
        self.db
            .persons
            .get(id)
            .ok_or(ServiceError::PersonNotFound(id))
    }

    /// Guarded delete: refused while vehicles still reference the person.
    pub fn delete(&mut self, id: Id<Person>) -> Result<(), ServiceError> {
        if !self.db.persons.contains(id) {
            return Err(ServiceError::PersonNotFound(id));
        }

        let vehicles = self.count_vehicles_of(id);
        if vehicles > 0 {
            return Err(ServiceError::PersonInUse { id, vehicles });
        }

        self.db.persons.remove(id);

        Ok(())
    }

    /// All persons as short projections, name ascending.
    #[must_use]
    pub fn list_short(&self) -> Vec<PersonShort> {
        let mut rows: Vec<PersonShort> = self
            .db
            .persons
            .scan()
            .map(|person| PersonShort {
                id: person.id(),
                name: person.name.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        rows
    }

    /// Casefolded substring search over names, bounded to `limit` rows.
    #[must_use]
    pub fn search_short(&self, query: &str, limit: usize) -> Vec<PersonShort> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.list_short()
            .into_iter()
            .filter(|person| person.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    #[must_use]
    pub fn count_vehicles_of(&self, id: Id<Person>) -> u64 {
        self.db
            .vehicles
            .scan()
            .filter(|v| v.owner == Some(id))
            .count() as u64
    }

    /// Grid page plus total count, hydrated with the admin account.
    pub fn query(&self, request: &GridRequest) -> Result<GridResponse<PersonRecord>, ServiceError> {
        Ok(self.db.person_grid().query(request)?)
    }

    /// Grid count only.
    pub fn count(&self, request: &GridRequest) -> Result<u64, ServiceError> {
        Ok(self.db.person_grid().count(request)?)
    }

    fn check_admin(&self, admin: Option<Id<Admin>>) -> Result<(), ServiceError> {
        if let Some(admin) = admin {
            if !self.db.admins.contains(admin) {
                return Err(ServiceError::AdminNotFound(admin));
            }
        }

        Ok(())
    }
}
