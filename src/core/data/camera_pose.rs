use crate::core::data::vec3::Vec3;

const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);
const DEFAULT_CAMERA_FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Camera position and unit forward direction, as supplied by the host each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub forward: Vec3,
}

impl CameraPose {
    /// Point `distance` units along the view ray.
    #[must_use]
    pub fn point_along_view(&self, distance: f64) -> Vec3 {
        self.position + self.forward * distance
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DEFAULT_CAMERA_POSITION,
            forward: DEFAULT_CAMERA_FORWARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pose_looks_at_origin() {
        let pose = CameraPose::default();

        assert_eq!(pose.point_along_view(3.0), Vec3::ZERO);
    }

    #[test]
    fn test_point_along_view_follows_forward() {
        let pose = CameraPose {
            position: Vec3::new(1.0, 1.0, 1.0),
            forward: Vec3::new(1.0, 0.0, 0.0),
        };

        assert_eq!(pose.point_along_view(2.5), Vec3::new(3.5, 1.0, 1.0));
    }
}
