use std::fmt;

/// Category of a GPU fault.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GpuFaultKind {
    OutOfMemory,
    Validation,
    Internal,
}

impl GpuFaultKind {
    /// Stable numeric code reported in logs.
    pub const fn code(self) -> u32 {
        match self {
            GpuFaultKind::OutOfMemory => 1,
            GpuFaultKind::Validation => 2,
            GpuFaultKind::Internal => 3,
        }
    }
}

/// A single fault reported by the GPU error query.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuFault {
    pub kind: GpuFaultKind,
    pub message: String,
}

impl GpuFault {
    pub fn new(kind: GpuFaultKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

impl fmt::Display for GpuFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}): {}", self.kind.code(), self.kind, self.message)
    }
}

/// Source of GPU faults, polled after the operations worth validating.
pub trait ErrorQuery {
    /// Takes the next pending fault, or `None` when no error is pending.
    fn poll_error(&mut self) -> Option<GpuFault>;
}

impl ErrorQuery for Option<GpuFault> {
    fn poll_error(&mut self) -> Option<GpuFault> {
        self.take()
    }
}

/// A GPU operation failed. Not recoverable.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuError {
    pub operation: String,
    pub fault: GpuFault,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: gpu error {}", self.operation, self.fault)
    }
}

impl std::error::Error for GpuError {}

/// Polls `query` once and fails on the first pending fault.
///
/// The fault is logged with the operation name before it is returned; callers
/// propagate it and abort the current call chain.
pub fn check_gpu_error<Q>(operation: &str, query: &mut Q) -> Result<(), GpuError>
where
    Q: ErrorQuery + ?Sized,
{
    let Some(fault) = query.poll_error() else {
        return Ok(());
    };

    let err = GpuError {
        operation: operation.to_string(),
        fault,
    };
    log::error!("{err}");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct Queue(VecDeque<GpuFault>);

    impl ErrorQuery for Queue {
        fn poll_error(&mut self) -> Option<GpuFault> {
            self.0.pop_front()
        }
    }

    #[test]
    fn no_error_is_ok() {
        let mut q: Option<GpuFault> = None;
        assert!(check_gpu_error("draw", &mut q).is_ok());
    }

    #[test]
    fn fault_carries_operation_name() {
        let mut q = Some(GpuFault::new(GpuFaultKind::Validation, "bad binding"));
        let err = check_gpu_error("create bind group", &mut q).unwrap_err();
        assert_eq!(err.operation, "create bind group");
        assert_eq!(err.fault.kind, GpuFaultKind::Validation);
        assert_eq!(
            err.to_string(),
            "create bind group: gpu error 2 (Validation): bad binding"
        );
    }

    #[test]
    fn first_fault_aborts_and_rest_stay_pending() {
        let mut q = Queue(VecDeque::from([
            GpuFault::new(GpuFaultKind::OutOfMemory, "first"),
            GpuFault::new(GpuFaultKind::Internal, "second"),
        ]));

        let err = check_gpu_error("submit", &mut q).unwrap_err();
        assert_eq!(err.fault.message, "first");
        assert_eq!(q.0.len(), 1);
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            GpuFaultKind::OutOfMemory.code(),
            GpuFaultKind::Validation.code(),
            GpuFaultKind::Internal.code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
