use em_core::{EmployerId, IndividualId, JobId, JobKindId};

/// One job slot.  The kind is drawn once at creation and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Job {
    pub id:       JobId,
    pub employer: EmployerId,
    pub kind:     JobKindId,
    /// Current holder.  Must agree with `Individual::job`.
    pub employee: Option<IndividualId>,
}

impl Job {
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.employee.is_none()
    }
}
