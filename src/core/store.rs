use crate::domain::model::Student;
use crate::utils::error::{RegistryError, Result};

pub const MIN_AGE: i32 = 15;
pub const MAX_AGE: i32 = 80;
pub const MIN_AVERAGE: f64 = 0.0;
pub const MAX_AVERAGE: f64 = 10.0;

/// In-memory owner of every student record.
///
/// Records keep their insertion order. All mutation goes through the
/// validated operations below; readers only ever get shared borrows.
#[derive(Debug, Default)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `candidate` after checking, in order: duplicate id, age, average, name.
    pub fn add(&mut self, candidate: Student) -> Result<&Student> {
        if self.students.iter().any(|s| s.id == candidate.id) {
            tracing::debug!("Rejected student {}: duplicate id", candidate.id);
            return Err(RegistryError::DuplicateId { id: candidate.id });
        }

        if !(MIN_AGE..=MAX_AGE).contains(&candidate.age) {
            tracing::debug!("Rejected student {}: age {}", candidate.id, candidate.age);
            return Err(RegistryError::InvalidAge { age: candidate.age });
        }

        check_average(candidate.average)?;

        if candidate.name.trim().is_empty() {
            tracing::debug!("Rejected student {}: blank name", candidate.id);
            return Err(RegistryError::InvalidName);
        }

        tracing::debug!("Adding student {} ({})", candidate.id, candidate.name);
        self.students.push(candidate);
        let index = self.students.len() - 1;
        Ok(&self.students[index])
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn find_by_id(&self, id: i64) -> Result<&Student> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound { id })
    }

    /// The average is validated before the lookup.
    pub fn update_average(&mut self, id: i64, average: f64) -> Result<&Student> {
        check_average(average)?;

        let student = self.find_mut(id)?;
        tracing::debug!(
            "Student {} average {} -> {}",
            id,
            student.average,
            average
        );
        student.average = average;
        Ok(&*student)
    }

    pub fn set_active(&mut self, id: i64, active: bool) -> Result<&Student> {
        let student = self.find_mut(id)?;
        tracing::debug!("Student {} active -> {}", id, active);
        student.active = active;
        Ok(&*student)
    }

    pub fn list_active(&self) -> Vec<&Student> {
        self.students.iter().filter(|s| s.active).collect()
    }

    /// Plain mean of every record's average; `0.0` when empty.
    pub fn average_of_averages(&self) -> f64 {
        if self.students.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.students.iter().map(|s| s.average).sum();
        sum / self.students.len() as f64
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn find_mut(&mut self, id: i64) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RegistryError::NotFound { id })
    }
}

fn check_average(average: f64) -> Result<()> {
    // NaN fails `contains`, so it is rejected along with out-of-range values.
    if !(MIN_AVERAGE..=MAX_AVERAGE).contains(&average) {
        tracing::debug!("Rejected average {}", average);
        return Err(RegistryError::InvalidAverage { average });
    }
    Ok(())
}
