use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use robur_domain::{
    CreateError, DayID, DeleteError, OwnerID, ProgramID, ProgramRepository, ReadError,
    StorageError, UpdateError, WorkoutDay, WorkoutProgram,
};

/// In-memory program store.
///
/// All repository operations take the single store lock, which makes
/// activation (deactivate all, then activate one) atomic with respect to
/// concurrent requests.
#[derive(Default)]
pub struct Memory {
    programs: Mutex<BTreeMap<ProgramID, WorkoutProgram>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<ProgramID, WorkoutProgram>>, StorageError> {
        self.programs
            .lock()
            .map_err(|err| StorageError::Other(err.to_string().into()))
    }
}

impl ProgramRepository for Memory {
    async fn read_programs(&self, owner: OwnerID) -> Result<Vec<WorkoutProgram>, ReadError> {
        let programs = self.lock()?;
        let mut result = programs
            .values()
            .filter(|p| p.owner == owner)
            .cloned()
            .collect::<Vec<_>>();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn create_program(
        &self,
        program: WorkoutProgram,
    ) -> Result<WorkoutProgram, CreateError> {
        let mut programs = self.lock()?;

        if programs.contains_key(&program.id) {
            return Err(CreateError::Conflict);
        }

        if program.is_active {
            for p in programs.values_mut().filter(|p| p.owner == program.owner) {
                p.is_active = false;
            }
        }

        programs.insert(program.id, program.clone());
        Ok(program)
    }

    async fn read_active_program(
        &self,
        owner: OwnerID,
    ) -> Result<Option<WorkoutProgram>, ReadError> {
        let programs = self.lock()?;
        Ok(programs
            .values()
            .find(|p| p.owner == owner && p.is_active)
            .cloned())
    }

    async fn activate_program(
        &self,
        id: ProgramID,
        owner: OwnerID,
    ) -> Result<ProgramID, UpdateError> {
        let mut programs = self.lock()?;

        if !programs.get(&id).is_some_and(|p| p.owner == owner) {
            return Err(UpdateError::NotFound);
        }

        for p in programs.values_mut().filter(|p| p.owner == owner) {
            p.is_active = p.id == id;
        }

        Ok(id)
    }

    async fn delete_program(
        &self,
        id: ProgramID,
        owner: OwnerID,
    ) -> Result<ProgramID, DeleteError> {
        let mut programs = self.lock()?;

        if !programs.get(&id).is_some_and(|p| p.owner == owner) {
            return Err(DeleteError::NotFound);
        }

        programs.remove(&id);
        Ok(id)
    }

    async fn read_day(&self, id: DayID) -> Result<WorkoutDay, ReadError> {
        let programs = self.lock()?;
        programs
            .values()
            .flat_map(|p| p.days.iter())
            .find(|d| d.id == id)
            .cloned()
            .ok_or(ReadError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use robur_domain::{
        ComposeError, ProgramService, Service, build_deload_variant, build_program,
    };

    use super::*;

    fn owner() -> OwnerID {
        1.into()
    }

    fn program() -> WorkoutProgram {
        build_program("pure_bodybuilding_ppl", owner()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_read_programs() {
        let memory = Memory::new();
        let program = memory.create_program(program()).await.unwrap();

        let programs = memory.read_programs(owner()).await.unwrap();
        assert_eq!(programs, vec![program]);
        assert_eq!(memory.read_programs(2.into()).await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_create_program_conflict() {
        let memory = Memory::new();
        let program = memory.create_program(program()).await.unwrap();

        assert!(matches!(
            memory.create_program(program).await,
            Err(CreateError::Conflict)
        ));
    }

    #[tokio::test]
    async fn test_at_most_one_active_program() {
        let memory = Memory::new();
        let first = memory.create_program(program()).await.unwrap();
        let second = memory.create_program(program()).await.unwrap();

        // creating a second active program displaces the first
        let active = memory.read_active_program(owner()).await.unwrap().unwrap();
        assert_eq!(active.id, second.id);

        memory.activate_program(first.id, owner()).await.unwrap();
        let active = memory.read_active_program(owner()).await.unwrap().unwrap();
        assert_eq!(active.id, first.id);
        let programs = memory.read_programs(owner()).await.unwrap();
        assert_eq!(programs.iter().filter(|p| p.is_active).count(), 1);
    }

    #[tokio::test]
    async fn test_activate_program_not_found() {
        let memory = Memory::new();
        let program = memory.create_program(program()).await.unwrap();

        assert!(matches!(
            memory.activate_program(ProgramID::nil(), owner()).await,
            Err(UpdateError::NotFound)
        ));
        assert!(matches!(
            memory.activate_program(program.id, 2.into()).await,
            Err(UpdateError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_program() {
        let memory = Memory::new();
        let program = memory.create_program(program()).await.unwrap();

        assert!(matches!(
            memory.delete_program(program.id, 2.into()).await,
            Err(DeleteError::NotFound)
        ));
        memory.delete_program(program.id, owner()).await.unwrap();
        assert_eq!(memory.read_programs(owner()).await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_read_day() {
        let memory = Memory::new();
        let program = memory.create_program(program()).await.unwrap();

        let day = memory.read_day(program.days[2].id).await.unwrap();
        assert_eq!(day, program.days[2]);
        assert!(matches!(
            memory.read_day(DayID::nil()).await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_service_composes_and_stores() {
        let service = Service::new(Memory::new());

        let program = service
            .create_program("pure_bodybuilding_ppl", owner())
            .await
            .unwrap();
        let deload = service
            .create_deload_program("pure_bodybuilding_ppl", owner())
            .await
            .unwrap();

        assert!(!deload.is_active);
        let active = service.get_active_program(owner()).await.unwrap().unwrap();
        assert_eq!(active.id, program.id);
        assert_eq!(service.get_programs(owner()).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_service_rejects_unknown_archetype() {
        let service = Service::new(Memory::new());

        assert!(matches!(
            service.create_program("nonexistent_archetype", owner()).await,
            Err(CreateError::Validation(ComposeError::UnknownArchetype(_)))
        ));
    }

    #[tokio::test]
    async fn test_deload_variant_is_stored_independently() {
        let memory = Memory::new();
        let program = memory.create_program(program()).await.unwrap();
        let deload = memory
            .create_program(build_deload_variant("pure_bodybuilding_ppl", owner()).unwrap())
            .await
            .unwrap();

        memory.delete_program(program.id, owner()).await.unwrap();
        let remaining = memory.read_programs(owner()).await.unwrap();
        assert_eq!(remaining, vec![deload]);
    }
}
