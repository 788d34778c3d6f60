//! Extended motion packet (id 13): extra physics channels for the player car only.

use serde::Serialize;

use crate::Result;
use crate::codec::Cursor;
use crate::header::{HEADER_LEN, PacketHeader, WHEEL_COUNT};

/// Player-car physics beyond what the motion packet carries.
/// Per-wheel arrays use wheel order RL, RR, FL, FR.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionExtraPacket {
    pub header: PacketHeader,
    pub suspension_position: [f32; WHEEL_COUNT],
    pub suspension_velocity: [f32; WHEEL_COUNT],
    pub suspension_acceleration: [f32; WHEEL_COUNT],
    /// Wheel speed in metres per second.
    pub wheel_speed: [f32; WHEEL_COUNT],
    pub wheel_slip_ratio: [f32; WHEEL_COUNT],
    pub wheel_slip_angle: [f32; WHEEL_COUNT],
    pub wheel_lat_force: [f32; WHEEL_COUNT],
    pub wheel_long_force: [f32; WHEEL_COUNT],
    /// Height of the centre of gravity above the ground.
    pub height_of_cog_above_ground: f32,
    /// Velocity in local space.
    pub local_velocity_x: f32,
    pub local_velocity_y: f32,
    pub local_velocity_z: f32,
    pub angular_velocity_x: f32,
    pub angular_velocity_y: f32,
    pub angular_velocity_z: f32,
    pub angular_acceleration_x: f32,
    pub angular_acceleration_y: f32,
    pub angular_acceleration_z: f32,
    /// Current front wheels angle in radians.
    pub front_wheels_angle: f32,
    pub wheel_vert_force: [f32; WHEEL_COUNT],
}

pub(crate) fn decode(header: PacketHeader, data: &[u8]) -> Result<MotionExtraPacket> {
    let mut cursor = Cursor::at(data, HEADER_LEN);
    Ok(MotionExtraPacket {
        header,
        suspension_position: cursor.read_f32_array()?,
        suspension_velocity: cursor.read_f32_array()?,
        suspension_acceleration: cursor.read_f32_array()?,
        wheel_speed: cursor.read_f32_array()?,
        wheel_slip_ratio: cursor.read_f32_array()?,
        wheel_slip_angle: cursor.read_f32_array()?,
        wheel_lat_force: cursor.read_f32_array()?,
        wheel_long_force: cursor.read_f32_array()?,
        height_of_cog_above_ground: cursor.read_f32()?,
        local_velocity_x: cursor.read_f32()?,
        local_velocity_y: cursor.read_f32()?,
        local_velocity_z: cursor.read_f32()?,
        angular_velocity_x: cursor.read_f32()?,
        angular_velocity_y: cursor.read_f32()?,
        angular_velocity_z: cursor.read_f32()?,
        angular_acceleration_x: cursor.read_f32()?,
        angular_acceleration_y: cursor.read_f32()?,
        angular_acceleration_z: cursor.read_f32()?,
        front_wheels_angle: cursor.read_f32()?,
        wheel_vert_force: cursor.read_f32_array()?,
    })
}
