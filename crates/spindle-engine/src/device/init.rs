/// Surface and depth settings for the GPU layer.
///
/// Device features and limits are not configurable: shape drawing needs no
/// optional features and runs within GLES-class limits.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB surface format when one is offered.
    ///
    /// Shape colors are plain RGB values; the demo turns this off so they are
    /// shown unconverted.
    pub prefer_srgb: bool,

    /// Swap behavior. FIFO is always available and suits on-demand redraw.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; replaced by a supported one when unavailable.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Format of the depth buffer cleared every frame.
    pub depth_format: wgpu::TextureFormat,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            depth_format: wgpu::TextureFormat::Depth32Float,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_suit_on_demand_drawing() {
        let init = GpuInit::default();
        assert!(init.prefer_srgb);
        assert_eq!(init.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(init.alpha_mode, None);
        assert_eq!(init.depth_format, wgpu::TextureFormat::Depth32Float);
    }
}
