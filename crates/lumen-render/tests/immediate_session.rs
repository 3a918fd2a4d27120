//! Driving an `ImmediateContext` the way a 2D overlay pass does.

use glam::{Vec3, Vec4};
use lumen_render::{
    BlendMode, GraphicsContext, ImmediateContext, MatrixMode, RenderError, StackLimits,
    TextureHandle, ortho_2d,
};

fn begin_2d(ctx: &mut ImmediateContext, width: f32, height: f32) {
    ctx.set_matrix_mode(MatrixMode::Projection);
    ctx.push_matrix().unwrap();
    ctx.load_matrix(ortho_2d(0.0, width, 0.0, height));
    ctx.set_matrix_mode(MatrixMode::ModelView);
    ctx.push_matrix().unwrap();
    ctx.load_identity();
}

fn end_2d(ctx: &mut ImmediateContext) {
    ctx.set_matrix_mode(MatrixMode::Projection);
    ctx.pop_matrix().unwrap();
    ctx.set_matrix_mode(MatrixMode::ModelView);
    ctx.pop_matrix().unwrap();
}

#[test]
fn test_window_corners_map_to_clip_space() {
    let mut ctx = ImmediateContext::new();
    begin_2d(&mut ctx, 800.0, 600.0);

    let transform = ctx.transform();
    let low = transform * Vec4::new(0.0, 0.0, 0.0, 1.0);
    let high = transform * Vec4::new(800.0, 600.0, 0.0, 1.0);
    let center = transform * Vec4::new(400.0, 300.0, 0.0, 1.0);

    assert!(low.abs_diff_eq(Vec4::new(-1.0, -1.0, 0.0, 1.0), 1e-5));
    assert!(high.abs_diff_eq(Vec4::new(1.0, 1.0, 0.0, 1.0), 1e-5));
    assert!(center.abs_diff_eq(Vec4::new(0.0, 0.0, 0.0, 1.0), 1e-5));
}

#[test]
fn test_session_restores_previous_state() {
    let mut ctx = ImmediateContext::new();
    ctx.translate(Vec3::new(5.0, 5.0, 0.0));
    let scene_view = ctx.model_view();

    begin_2d(&mut ctx, 320.0, 240.0);
    ctx.translate(Vec3::new(40.0, 20.0, 0.0));
    end_2d(&mut ctx);

    assert_eq!(ctx.model_view(), scene_view);
    assert_eq!(ctx.projection(), glam::Mat4::IDENTITY);
    assert_eq!(ctx.stack(MatrixMode::Projection).depth(), 1);
    assert_eq!(ctx.stack(MatrixMode::ModelView).depth(), 1);
}

#[test]
fn test_nested_text_blocks_within_limits() {
    let mut ctx = ImmediateContext::with_limits(StackLimits::default().model_view(4));
    begin_2d(&mut ctx, 100.0, 100.0);

    ctx.push_matrix().unwrap();
    ctx.push_matrix().unwrap();
    assert!(matches!(
        ctx.push_matrix(),
        Err(RenderError::StackOverflow {
            mode: MatrixMode::ModelView,
            limit: 4
        })
    ));

    ctx.pop_matrix().unwrap();
    ctx.pop_matrix().unwrap();
    end_2d(&mut ctx);
    assert!(matches!(
        ctx.pop_matrix(),
        Err(RenderError::StackUnderflow {
            mode: MatrixMode::ModelView
        })
    ));
}

#[test]
fn test_blend_and_texture_state() {
    let mut ctx = ImmediateContext::new();
    assert_eq!(ctx.blend_mode(), None);

    ctx.set_blend_mode(Some(BlendMode::SourceOver));
    ctx.bind_texture(TextureHandle::new(3));
    assert_eq!(ctx.blend_mode(), Some(BlendMode::SourceOver));
    assert_eq!(ctx.bound_texture().map(TextureHandle::raw), Some(3));

    ctx.bind_texture(None);
    assert_eq!(ctx.bound_texture(), None);
}
