use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use crate::constants::{STAGE_GRID_CELL, STAGE_GRID_EXTENT, STAGE_RADIUS};

#[derive(Component)]
pub struct GroundGrid;

/// Spawn the static stage the monument stands on: key and fill lights, a
/// ground disc, and a reference grid.
pub fn spawn_stage(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    spawn_lighting(commands);
    spawn_ground(commands, meshes, materials);
    spawn_reference_grid(commands, meshes, materials);
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 9_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    // Soft fill from the opposite side so facades never go fully black
    commands.spawn((
        DirectionalLight {
            illuminance: 2_500.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            -2.2,
            -std::f32::consts::FRAC_PI_6,
        )),
    ));
}

fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.16, 0.17, 0.19),
        perceptual_roughness: 0.95,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(STAGE_RADIUS))),
        MeshMaterial3d(material),
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));
}

/// Flat line grid centred on the origin, slightly above the ground disc to
/// avoid z-fighting.
fn spawn_reference_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.12),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let extent = STAGE_GRID_EXTENT;
    let cell = STAGE_GRID_CELL;
    let line_count = (2.0 * extent / cell) as i32 + 1;

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(line_count as usize * 4);
    for i in 0..line_count {
        let offset = -extent + i as f32 * cell;
        positions.push([offset, 0.01, -extent]);
        positions.push([offset, 0.01, extent]);
        positions.push([-extent, 0.01, offset]);
        positions.push([extent, 0.01, offset]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::LineList,
        RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);

    commands.spawn((
        GroundGrid,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(material),
        Transform::default(),
    ));
}
