//! Motion packet (id 0): physics data for every car on track.
//!
//! For the normalised direction vectors, divide by 32767.0 to convert to
//! float - 16-bit signed values pack the data on the assumption that
//! direction components are always between -1.0 and 1.0.

use serde::Serialize;

use crate::codec::Cursor;
use crate::header::{HEADER_LEN, MAX_CARS, PacketHeader};
use crate::Result;

/// World-space motion state of one car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarMotion {
    /// World space X position in metres.
    pub world_position_x: f32,
    pub world_position_y: f32,
    pub world_position_z: f32,
    /// Velocity in world space X in metres per second.
    pub world_velocity_x: f32,
    pub world_velocity_y: f32,
    pub world_velocity_z: f32,
    /// World space forward X direction (normalised).
    pub world_forward_dir_x: i16,
    pub world_forward_dir_y: i16,
    pub world_forward_dir_z: i16,
    /// World space right X direction (normalised).
    pub world_right_dir_x: i16,
    pub world_right_dir_y: i16,
    pub world_right_dir_z: i16,
    /// Lateral G-force component.
    pub g_force_lateral: f32,
    /// Longitudinal G-force component.
    pub g_force_longitudinal: f32,
    /// Vertical G-force component.
    pub g_force_vertical: f32,
    /// Yaw angle in radians.
    pub yaw: f32,
    /// Pitch angle in radians.
    pub pitch: f32,
    /// Roll angle in radians.
    pub roll: f32,
}

impl CarMotion {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(Self {
            world_position_x: cursor.read_f32()?,
            world_position_y: cursor.read_f32()?,
            world_position_z: cursor.read_f32()?,
            world_velocity_x: cursor.read_f32()?,
            world_velocity_y: cursor.read_f32()?,
            world_velocity_z: cursor.read_f32()?,
            world_forward_dir_x: cursor.read_i16()?,
            world_forward_dir_y: cursor.read_i16()?,
            world_forward_dir_z: cursor.read_i16()?,
            world_right_dir_x: cursor.read_i16()?,
            world_right_dir_y: cursor.read_i16()?,
            world_right_dir_z: cursor.read_i16()?,
            g_force_lateral: cursor.read_f32()?,
            g_force_longitudinal: cursor.read_f32()?,
            g_force_vertical: cursor.read_f32()?,
            yaw: cursor.read_f32()?,
            pitch: cursor.read_f32()?,
            roll: cursor.read_f32()?,
        })
    }
}

/// Motion data for all cars on track, one slot per grid position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionPacket {
    pub header: PacketHeader,
    pub car_motion: [CarMotion; MAX_CARS],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<MotionPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(MotionPacket { header, car_motion: cursor.read_array(CarMotion::decode)? })
}
