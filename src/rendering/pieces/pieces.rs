//! Chess piece 3D rendering - procedural piece models
//!
//! Every piece is a small stack of primitive meshes (a base, a body, and a head
//! that tells the types apart) under one parent entity. The parent carries the
//! [`PieceModel`] marker and is the only thing the turn cycle moves; children only hold
//! geometry.
//!
//! # Data-driven parts
//!
//! [`piece_parts`] lists the parts of each piece type as plain data. [`PieceAssets`]
//! turns that list into mesh handles once at startup; spawning a piece clones handles
//! and never builds a mesh.
//!
//! ```text
//!          ┌─ head (sphere / crown / cross / block)
//!          ├─ body (frustum)
//!  parent ─┴─ base (frustum)
//! ```
//!
//! # Materials
//!
//! One material per side, shared by every part of every piece of that colour.

use std::collections::HashMap;
use std::f32::consts::TAU;

use bevy::prelude::*;
use chess_rules::{BoardPiece, BoardSquare, PieceColor, PieceType};

use crate::core::GameState;

/// Marker on the parent entity of a rendered piece
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceModel {
    pub piece: BoardPiece,
}

/// Geometry of one part, dimensions in world units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Frustum {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
    },
    Block {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cone {
        radius: f32,
        height: f32,
    },
}

impl PartShape {
    fn mesh(self) -> Mesh {
        match self {
            PartShape::Frustum {
                radius_top,
                radius_bottom,
                height,
            } => ConicalFrustum {
                radius_top,
                radius_bottom,
                height,
            }
            .into(),
            PartShape::Sphere { radius } => Sphere::new(radius).into(),
            PartShape::Block {
                width,
                height,
                depth,
            } => Cuboid::new(width, height, depth).into(),
            PartShape::Cone { radius, height } => Cone { radius, height }.into(),
        }
    }
}

/// One primitive of a piece, relative to the piece's origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecePart {
    pub shape: PartShape,
    pub offset: Vec3,
    /// Rotation about X in radians
    pub tilt: f32,
}

const fn part(shape: PartShape, x: f32, y: f32, z: f32) -> PiecePart {
    PiecePart {
        shape,
        offset: Vec3::new(x, y, z),
        tilt: 0.0,
    }
}

const fn frustum(radius_top: f32, radius_bottom: f32, height: f32) -> PartShape {
    PartShape::Frustum {
        radius_top,
        radius_bottom,
        height,
    }
}

const fn block(width: f32, height: f32, depth: f32) -> PartShape {
    PartShape::Block {
        width,
        height,
        depth,
    }
}

/// Parts making up a piece of the given type
pub fn piece_parts(piece_type: PieceType) -> Vec<PiecePart> {
    match piece_type {
        PieceType::Pawn => vec![
            part(frustum(0.3, 0.3, 0.1), 0.0, 0.05, 0.0),
            part(frustum(0.2, 0.25, 0.4), 0.0, 0.3, 0.0),
            part(PartShape::Sphere { radius: 0.2 }, 0.0, 0.6, 0.0),
        ],
        PieceType::Rook => {
            let mut parts = vec![
                part(frustum(0.35, 0.35, 0.15), 0.0, 0.075, 0.0),
                part(frustum(0.3, 0.3, 0.5), 0.0, 0.375, 0.0),
                part(frustum(0.35, 0.3, 0.15), 0.0, 0.7, 0.0),
            ];
            // Battlements on the four diagonals of the crown
            for (x, z) in [(0.15, 0.15), (-0.15, 0.15), (0.15, -0.15), (-0.15, -0.15)] {
                parts.push(part(block(0.1, 0.15, 0.1), x, 0.825, z));
            }
            parts
        }
        PieceType::Knight => vec![
            part(frustum(0.35, 0.35, 0.15), 0.0, 0.075, 0.0),
            part(frustum(0.2, 0.3, 0.4), 0.0, 0.35, 0.0),
            PiecePart {
                tilt: -0.3,
                ..part(block(0.25, 0.4, 0.6), 0.0, 0.7, 0.0)
            },
        ],
        PieceType::Bishop => vec![
            part(frustum(0.35, 0.35, 0.15), 0.0, 0.075, 0.0),
            part(frustum(0.2, 0.3, 0.5), 0.0, 0.4, 0.0),
            part(PartShape::Sphere { radius: 0.15 }, 0.0, 0.8, 0.0),
            part(block(0.1, 0.2, 0.1), 0.0, 0.95, 0.0),
            part(block(0.2, 0.1, 0.1), 0.0, 0.9, 0.0),
        ],
        PieceType::Queen => {
            let mut parts = royal_body();
            for i in 0..8 {
                let angle = i as f32 * TAU / 8.0;
                parts.push(part(
                    PartShape::Cone {
                        radius: 0.06,
                        height: 0.15,
                    },
                    angle.cos() * 0.25,
                    0.95,
                    angle.sin() * 0.25,
                ));
            }
            parts
        }
        PieceType::King => {
            let mut parts = royal_body();
            parts.push(part(block(0.1, 0.3, 0.1), 0.0, 1.1, 0.0));
            parts.push(part(block(0.25, 0.1, 0.1), 0.0, 1.0, 0.0));
            parts
        }
    }
}

/// Base, body and crown shared by king and queen
fn royal_body() -> Vec<PiecePart> {
    vec![
        part(frustum(0.4, 0.4, 0.15), 0.0, 0.075, 0.0),
        part(frustum(0.25, 0.35, 0.6), 0.0, 0.45, 0.0),
        part(frustum(0.35, 0.25, 0.2), 0.0, 0.85, 0.0),
    ]
}

pub fn piece_material_color(color: PieceColor) -> Color {
    match color {
        PieceColor::White => Color::WHITE,
        PieceColor::Black => Color::srgb_u8(0x08, 0x13, 0xa8),
    }
}

/// Mesh handles per piece type and one material per side
#[derive(Resource)]
pub struct PieceAssets {
    parts: HashMap<PieceType, Vec<(Handle<Mesh>, Transform)>>,
    white: Handle<StandardMaterial>,
    black: Handle<StandardMaterial>,
}

impl FromWorld for PieceAssets {
    fn from_world(world: &mut World) -> Self {
        let mut parts = HashMap::new();
        {
            let mut meshes = world.resource_mut::<Assets<Mesh>>();
            for piece_type in [
                PieceType::King,
                PieceType::Queen,
                PieceType::Bishop,
                PieceType::Knight,
                PieceType::Rook,
                PieceType::Pawn,
            ] {
                let handles = piece_parts(piece_type)
                    .into_iter()
                    .map(|p| {
                        let transform = Transform::from_translation(p.offset)
                            .with_rotation(Quat::from_rotation_x(p.tilt));
                        (meshes.add(p.shape.mesh()), transform)
                    })
                    .collect();
                parts.insert(piece_type, handles);
            }
        }

        let mut materials = world.resource_mut::<Assets<StandardMaterial>>();
        let white = materials.add(piece_material_color(PieceColor::White));
        let black = materials.add(piece_material_color(PieceColor::Black));

        Self {
            parts,
            white,
            black,
        }
    }
}

impl PieceAssets {
    pub fn material(&self, color: PieceColor) -> Handle<StandardMaterial> {
        match color {
            PieceColor::White => self.white.clone(),
            PieceColor::Black => self.black.clone(),
        }
    }

    pub fn parts(&self, piece_type: PieceType) -> &[(Handle<Mesh>, Transform)] {
        self.parts.get(&piece_type).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Spawn a piece standing at `position`, returning the parent entity
pub fn spawn_piece_model(
    commands: &mut Commands,
    assets: &PieceAssets,
    square: BoardSquare,
    piece: BoardPiece,
    position: Vec3,
) -> Entity {
    let material = assets.material(piece.color);
    commands
        .spawn((
            Transform::from_translation(position),
            Visibility::default(),
            PieceModel { piece },
            Name::new(format!("{} {:?} {}", piece.color, piece.piece_type, square)),
            DespawnOnExit(GameState::InGame),
        ))
        .with_children(|parent| {
            for (mesh, transform) in assets.parts(piece.piece_type) {
                parent.spawn((
                    Mesh3d(mesh.clone()),
                    MeshMaterial3d(material.clone()),
                    *transform,
                ));
            }
        })
        .id()
}
