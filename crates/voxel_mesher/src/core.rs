//! Core type definitions for the mesher.

use glam::IVec3;

use crate::error::MeshError;

/// Occupancy values strictly above this threshold are solid.
pub const SOLID_THRESHOLD: f32 = 0.5;

/// Width of one packed face-visibility column (bits per `u32`).
pub const BINARY_SLICE_WIDTH: usize = 32;

/// Vertices emitted per voxel in the worst case (6 faces × 2 triangles × 3).
pub const WORST_CASE_VERTICES_PER_VOXEL: usize = 36;

/// Face direction tag written into the mesh's face channel.
///
/// The discriminants are the values downstream shaders use to index a
/// texture array, so they must stay stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FaceId {
    /// +Y
    Top = 0,
    /// -Y
    Bottom = 1,
    /// +X
    Right = 2,
    /// -X
    Left = 3,
    /// +Z
    Front = 4,
    /// -Z
    Back = 5,
}

impl FaceId {
    /// All faces in tag order.
    pub const ALL: [FaceId; 6] = [
        FaceId::Top,
        FaceId::Bottom,
        FaceId::Right,
        FaceId::Left,
        FaceId::Front,
        FaceId::Back,
    ];

    /// Face produced by sweeping `axis` in the given direction.
    #[inline]
    pub const fn from_plane(axis: PlaneAxis, forward: bool) -> Self {
        match (axis, forward) {
            (PlaneAxis::XZ, true) => FaceId::Top,
            (PlaneAxis::XZ, false) => FaceId::Bottom,
            (PlaneAxis::YZ, true) => FaceId::Right,
            (PlaneAxis::YZ, false) => FaceId::Left,
            (PlaneAxis::XY, true) => FaceId::Front,
            (PlaneAxis::XY, false) => FaceId::Back,
        }
    }

    /// Plane whose sweep produces this face.
    #[inline]
    pub const fn axis(self) -> PlaneAxis {
        match self {
            FaceId::Top | FaceId::Bottom => PlaneAxis::XZ,
            FaceId::Right | FaceId::Left => PlaneAxis::YZ,
            FaceId::Front | FaceId::Back => PlaneAxis::XY,
        }
    }

    /// Whether the face points along the positive direction of its axis.
    #[inline]
    pub const fn is_forward(self) -> bool {
        matches!(self, FaceId::Top | FaceId::Right | FaceId::Front)
    }

    /// Unit vector pointing out of the solid side.
    #[inline]
    pub fn outward(self) -> IVec3 {
        let step = if self.is_forward() { 1 } else { -1 };
        self.axis().depth_unit() * step
    }

    /// Offset applied to a quad's corners so the face sits on the far side of
    /// its voxel for forward faces.
    #[inline]
    pub fn plane_offset(self) -> IVec3 {
        if self.is_forward() {
            self.axis().depth_unit()
        } else {
            IVec3::ZERO
        }
    }

    /// Value written to both components of the per-vertex face channel.
    #[inline]
    pub fn tag(self) -> f32 {
        self as u8 as f32
    }
}

impl TryFrom<u8> for FaceId {
    type Error = MeshError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FaceId::ALL
            .get(value as usize)
            .copied()
            .ok_or(MeshError::InvalidFace(value))
    }
}

/// Slicing plane used to sweep the volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlaneAxis {
    /// Left / Right faces; depth runs along X.
    YZ = 0,
    /// Top / Bottom faces; depth runs along Y.
    XZ = 1,
    /// Front / Back faces; depth runs along Z.
    XY = 2,
}

impl PlaneAxis {
    /// Planes in sweep order.
    pub const ALL: [PlaneAxis; 3] = [PlaneAxis::YZ, PlaneAxis::XZ, PlaneAxis::XY];

    /// Map a slice-local position to volume coordinates.
    #[inline]
    pub const fn to_voxel(self, local_x: i32, local_y: i32, depth: i32) -> IVec3 {
        match self {
            PlaneAxis::YZ => IVec3::new(depth, local_y, local_x),
            PlaneAxis::XZ => IVec3::new(local_x, depth, local_y),
            PlaneAxis::XY => IVec3::new(local_x, local_y, depth),
        }
    }

    /// Unit vector along the depth direction.
    #[inline]
    pub const fn depth_unit(self) -> IVec3 {
        self.to_voxel(0, 0, 1)
    }

    /// Whether quads on this plane are wound `(A,B,C)+(A,C,D)`.
    ///
    /// XY winds A-first when sweeping forward; YZ and XZ invert the flag
    /// because their local axes are swapped relative to world handedness.
    #[inline]
    pub const fn winds_from_a(self, forward: bool) -> bool {
        match self {
            PlaneAxis::XY => forward,
            PlaneAxis::YZ | PlaneAxis::XZ => !forward,
        }
    }
}

impl TryFrom<u8> for PlaneAxis {
    type Error = MeshError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PlaneAxis::ALL
            .get(value as usize)
            .copied()
            .ok_or(MeshError::InvalidAxis(value))
    }
}

/// Planar, axis-aligned rectangle covering a run of visible faces.
///
/// Corners sit on the voxel layer's near plane; the encoder lifts forward
/// faces onto the far plane with [`FaceId::plane_offset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quad {
    /// Bottom left.
    pub a: IVec3,
    /// Bottom right.
    pub b: IVec3,
    /// Top right.
    pub c: IVec3,
    /// Top left.
    pub d: IVec3,
    pub face: FaceId,
}

impl Quad {
    /// Quad for a `width × height` run anchored at a slice-local position.
    ///
    /// `width` extends along local X, `height` along local Y.
    pub fn from_run(
        axis: PlaneAxis,
        forward: bool,
        local_x: usize,
        local_y: usize,
        depth: usize,
        width: usize,
        height: usize,
    ) -> Self {
        let (x, y, z) = (local_x as i32, local_y as i32, depth as i32);
        let (w, h) = (width as i32, height as i32);
        Self {
            a: axis.to_voxel(x, y, z),
            b: axis.to_voxel(x + w, y, z),
            c: axis.to_voxel(x + w, y + h, z),
            d: axis.to_voxel(x, y + h, z),
            face: FaceId::from_plane(axis, forward),
        }
    }

    /// Single-voxel quad for one face of the voxel at `voxel`.
    pub fn unit(face: FaceId, voxel: IVec3) -> Self {
        let axis = face.axis();
        let (local_x, local_y, depth) = match axis {
            PlaneAxis::YZ => (voxel.z, voxel.y, voxel.x),
            PlaneAxis::XZ => (voxel.x, voxel.z, voxel.y),
            PlaneAxis::XY => (voxel.x, voxel.y, voxel.z),
        };
        Self {
            a: axis.to_voxel(local_x, local_y, depth),
            b: axis.to_voxel(local_x + 1, local_y, depth),
            c: axis.to_voxel(local_x + 1, local_y + 1, depth),
            d: axis.to_voxel(local_x, local_y + 1, depth),
            face,
        }
    }

    /// Inclusive-exclusive voxel bounds covered by this quad on its layer.
    pub fn bounds(&self) -> (IVec3, IVec3) {
        let min = self.a.min(self.c);
        let max = self.a.max(self.c) + self.face.axis().depth_unit();
        (min, max)
    }

    /// Number of unit faces covered.
    pub fn area(&self) -> usize {
        let (min, max) = self.bounds();
        let extent = max - min;
        (extent.x * extent.y * extent.z) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_axis_transforms() {
        assert_eq!(PlaneAxis::YZ.to_voxel(1, 2, 3), IVec3::new(3, 2, 1));
        assert_eq!(PlaneAxis::XZ.to_voxel(1, 2, 3), IVec3::new(1, 3, 2));
        assert_eq!(PlaneAxis::XY.to_voxel(1, 2, 3), IVec3::new(1, 2, 3));
    }

    #[test]
    fn face_plane_mapping_roundtrips() {
        for face in FaceId::ALL {
            assert_eq!(FaceId::from_plane(face.axis(), face.is_forward()), face);
        }
    }

    #[test]
    fn face_tags_are_stable() {
        let tags: Vec<f32> = FaceId::ALL.iter().map(|f| f.tag()).collect();
        assert_eq!(tags, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn outward_directions() {
        assert_eq!(FaceId::Top.outward(), IVec3::Y);
        assert_eq!(FaceId::Bottom.outward(), -IVec3::Y);
        assert_eq!(FaceId::Right.outward(), IVec3::X);
        assert_eq!(FaceId::Left.outward(), -IVec3::X);
        assert_eq!(FaceId::Front.outward(), IVec3::Z);
        assert_eq!(FaceId::Back.outward(), -IVec3::Z);
    }

    #[test]
    fn raw_enumerants_out_of_range_are_rejected() {
        assert_eq!(PlaneAxis::try_from(1).unwrap(), PlaneAxis::XZ);
        assert!(matches!(PlaneAxis::try_from(3), Err(MeshError::InvalidAxis(3))));
        assert_eq!(FaceId::try_from(5).unwrap(), FaceId::Back);
        assert!(matches!(FaceId::try_from(6), Err(MeshError::InvalidFace(6))));
    }

    #[test]
    fn winding_is_inverted_on_yz_and_xz() {
        assert!(PlaneAxis::XY.winds_from_a(true));
        assert!(!PlaneAxis::XY.winds_from_a(false));
        assert!(!PlaneAxis::YZ.winds_from_a(true));
        assert!(PlaneAxis::YZ.winds_from_a(false));
        assert!(!PlaneAxis::XZ.winds_from_a(true));
        assert!(PlaneAxis::XZ.winds_from_a(false));
    }

    #[test]
    fn run_quad_corners_on_yz() {
        let quad = Quad::from_run(PlaneAxis::YZ, true, 1, 2, 5, 3, 4);
        assert_eq!(quad.a, IVec3::new(5, 2, 1));
        assert_eq!(quad.b, IVec3::new(5, 2, 4));
        assert_eq!(quad.c, IVec3::new(5, 6, 4));
        assert_eq!(quad.d, IVec3::new(5, 6, 1));
        assert_eq!(quad.face, FaceId::Right);
        assert_eq!(quad.area(), 12);
    }

    #[test]
    fn unit_quad_matches_run_of_one() {
        let voxel = IVec3::new(3, 7, 2);
        for face in FaceId::ALL {
            let unit = Quad::unit(face, voxel);
            let (min, max) = unit.bounds();
            assert_eq!(min, voxel);
            assert_eq!(max, voxel + IVec3::ONE);
            assert_eq!(unit.area(), 1);
        }
    }
}
