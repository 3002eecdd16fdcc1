use log::{debug, error};

use crate::{
    CreateError, DayID, DeleteError, OwnerID, ProgramID, ProgramRepository, ProgramService,
    ReadError, UpdateError, WorkoutDay, WorkoutProgram, build_deload_variant, build_program,
};

pub struct Service<R> {
    repository: R,
}

impl<R: ProgramRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ProgramRepository> ProgramService for Service<R> {
    async fn get_programs(&self, owner: OwnerID) -> Result<Vec<WorkoutProgram>, ReadError> {
        log_on_error!(
            self.repository.read_programs(owner),
            ReadError,
            "get",
            "programs"
        )
    }

    async fn create_program(
        &self,
        archetype: &str,
        owner: OwnerID,
    ) -> Result<WorkoutProgram, CreateError> {
        let program = build_program(archetype, owner)?;
        log_on_error!(
            self.repository.create_program(program),
            CreateError,
            "create",
            "program"
        )
    }

    async fn create_deload_program(
        &self,
        archetype: &str,
        owner: OwnerID,
    ) -> Result<WorkoutProgram, CreateError> {
        let program = build_deload_variant(archetype, owner)?;
        log_on_error!(
            self.repository.create_program(program),
            CreateError,
            "create",
            "deload program"
        )
    }

    async fn get_active_program(
        &self,
        owner: OwnerID,
    ) -> Result<Option<WorkoutProgram>, ReadError> {
        log_on_error!(
            self.repository.read_active_program(owner),
            ReadError,
            "get",
            "active program"
        )
    }

    async fn activate_program(
        &self,
        id: ProgramID,
        owner: OwnerID,
    ) -> Result<ProgramID, UpdateError> {
        log_on_error!(
            self.repository.activate_program(id, owner),
            UpdateError,
            "activate",
            "program"
        )
    }

    async fn delete_program(
        &self,
        id: ProgramID,
        owner: OwnerID,
    ) -> Result<ProgramID, DeleteError> {
        log_on_error!(
            self.repository.delete_program(id, owner),
            DeleteError,
            "delete",
            "program"
        )
    }

    async fn get_day(&self, id: DayID) -> Result<WorkoutDay, ReadError> {
        log_on_error!(self.repository.read_day(id), ReadError, "get", "day")
    }
}
