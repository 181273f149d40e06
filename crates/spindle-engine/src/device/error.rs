use spindle_scene::{check_gpu_error, GpuError, GpuFault, GpuFaultKind};

/// High-level response after a surface error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error; skip the current frame.
    SkipFrame,
    /// Fatal error (commonly OOM); terminate gracefully.
    Fatal,
}

/// Operation name reported when acquiring a frame fails for good.
pub(crate) const ACQUIRE_OPERATION: &str = "acquire surface texture";

/// Maps an error captured by a wgpu error scope to a fault.
pub(crate) fn fault_from_wgpu(err: wgpu::Error) -> GpuFault {
    let kind = match &err {
        wgpu::Error::OutOfMemory { .. } => GpuFaultKind::OutOfMemory,
        wgpu::Error::Validation { .. } => GpuFaultKind::Validation,
        _ => GpuFaultKind::Internal,
    };
    GpuFault::new(kind, err.to_string())
}

/// Turns a fatal surface action into a checked `GpuError`.
///
/// Recoverable actions pass through unchanged.
pub(crate) fn check_surface_action(
    action: SurfaceErrorAction,
    err: &wgpu::SurfaceError,
) -> Result<SurfaceErrorAction, GpuError> {
    let mut pending = (action == SurfaceErrorAction::Fatal)
        .then(|| GpuFault::new(GpuFaultKind::OutOfMemory, err.to_string()));
    check_gpu_error(ACQUIRE_OPERATION, &mut pending)?;
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── wgpu error scopes ─────────────────────────────────────────────────

    #[test]
    fn out_of_memory_maps_to_oom_fault() {
        let fault = fault_from_wgpu(wgpu::Error::OutOfMemory {
            source: Box::new(std::io::Error::other("heap exhausted")),
        });
        assert_eq!(fault.kind, GpuFaultKind::OutOfMemory);
        assert!(!fault.message.is_empty());
    }

    #[test]
    fn validation_keeps_description() {
        let fault = fault_from_wgpu(wgpu::Error::Validation {
            source: Box::new(std::io::Error::other("bad binding")),
            description: "bind group 0 is missing".to_string(),
        });
        assert_eq!(fault.kind, GpuFaultKind::Validation);
        assert!(fault.message.contains("bind group 0 is missing"));
    }

    #[test]
    fn anything_else_is_internal() {
        let fault = fault_from_wgpu(wgpu::Error::Internal {
            source: Box::new(std::io::Error::other("driver")),
            description: "backend failure".to_string(),
        });
        assert_eq!(fault.kind, GpuFaultKind::Internal);
        assert!(fault.message.contains("backend failure"));
    }

    // ── surface actions ───────────────────────────────────────────────────

    #[test]
    fn fatal_surface_action_becomes_gpu_error() {
        let err = check_surface_action(SurfaceErrorAction::Fatal, &wgpu::SurfaceError::OutOfMemory)
            .unwrap_err();
        assert_eq!(err.operation, ACQUIRE_OPERATION);
        assert_eq!(err.fault.kind, GpuFaultKind::OutOfMemory);
        assert!(err.to_string().starts_with("acquire surface texture: gpu error 1"));
    }

    #[test]
    fn recoverable_surface_actions_pass_through() {
        for action in [SurfaceErrorAction::Reconfigured, SurfaceErrorAction::SkipFrame] {
            assert_eq!(
                check_surface_action(action, &wgpu::SurfaceError::Timeout).unwrap(),
                action
            );
        }
    }
}
