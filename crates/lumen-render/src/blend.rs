/// Blending applied to overlay draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BlendMode {
    /// Standard source-over compositing: `src * a + dst * (1 - a)`.
    #[default]
    SourceOver,
    /// Additive blending, for glows.
    Additive,
}

impl BlendMode {
    /// The equivalent `wgpu` blend state for pipeline creation.
    pub fn to_wgpu(self) -> wgpu::BlendState {
        match self {
            BlendMode::SourceOver => wgpu::BlendState::ALPHA_BLENDING,
            BlendMode::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent::OVER,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_over_is_alpha_blending() {
        assert_eq!(BlendMode::default(), BlendMode::SourceOver);
        assert_eq!(BlendMode::SourceOver.to_wgpu(), wgpu::BlendState::ALPHA_BLENDING);
    }

    #[test]
    fn test_additive_keeps_destination() {
        let state = BlendMode::Additive.to_wgpu();
        assert_eq!(state.color.dst_factor, wgpu::BlendFactor::One);
    }
}
