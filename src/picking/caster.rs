//! Pointer → world ray → nearest hit across every loaded model.

use glam::Vec2;

use super::{resolve, Hit, Selection};
use crate::camera::{Camera, Viewport};
use crate::geometry::Ray;
use crate::model::{Model, ModelSet};
use crate::options::PickingOptions;

/// First-hit-only ray caster over a set of models.
///
/// Stateless apart from its tolerances; every cast is a pure function of
/// its inputs and the models' static spatial indexes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster {
    tie_epsilon: f32,
    max_distance: f32,
}

impl Default for RayCaster {
    fn default() -> Self {
        Self::new(&PickingOptions::default())
    }
}

impl RayCaster {
    /// Caster using the tolerances in `options`.
    #[must_use]
    pub fn new(options: &PickingOptions) -> Self {
        Self {
            tie_epsilon: options.tie_epsilon.max(0.0),
            max_distance: options.max_distance,
        }
    }

    /// Cast from a pixel position in `viewport` through `camera`.
    ///
    /// Returns `None` when nothing is under the pointer, including when the
    /// viewport has no area.
    #[must_use]
    pub fn cast(
        &self,
        pointer: Vec2,
        viewport: &Viewport,
        camera: &Camera,
        models: &[Model],
    ) -> Option<Hit> {
        let ndc = viewport.pixel_to_ndc(pointer)?;
        self.cast_ray(&camera.ray_through_ndc(ndc), models)
    }

    /// Nearest hit of a world-space ray.
    ///
    /// Hits within the tie tolerance of each other go to the smaller model
    /// id, then the smaller face index.
    #[must_use]
    pub fn cast_ray(&self, ray: &Ray, models: &[Model]) -> Option<Hit> {
        if ray.is_degenerate() {
            return None;
        }
        let inv_dir = ray.direction.recip();
        let mut best: Option<Hit> = None;
        for model in models {
            let limit = best.map_or(self.max_distance, |hit| {
                hit.distance + self.tie_epsilon
            });
            if model
                .world_bounds()
                .intersect_ray(ray, inv_dir, limit)
                .is_none()
            {
                continue;
            }
            let Some(hit) = Self::cast_model(ray, model) else {
                continue;
            };
            if hit.distance > self.max_distance {
                continue;
            }
            if best.is_none_or(|current| self.wins(&hit, &current)) {
                best = Some(hit);
            }
        }
        best
    }

    /// Cast then resolve in one step.
    #[must_use]
    pub fn pick(
        &self,
        pointer: Vec2,
        viewport: &Viewport,
        camera: &Camera,
        models: &ModelSet,
    ) -> Option<Selection> {
        self.cast(pointer, viewport, camera, models.models())
            .map(|hit| resolve(&hit, models))
    }

    /// Query one model in its local space and report in world units.
    fn cast_model(ray: &Ray, model: &Model) -> Option<Hit> {
        let local = ray.transformed(&model.inverse_transform());
        let face_hit = model
            .geometry()
            .spatial_index()
            .cast_nearest(&local, f32::INFINITY)?;
        let point = model.transform().transform_point3(local.at(face_hit.t));
        Some(Hit {
            model_id: model.id(),
            face_index: face_hit.face,
            distance: point.distance(ray.origin),
            point,
            ray: *ray,
        })
    }

    fn wins(&self, candidate: &Hit, current: &Hit) -> bool {
        if (candidate.distance - current.distance).abs() <= self.tie_epsilon {
            (candidate.model_id, candidate.face_index)
                < (current.model_id, current.face_index)
        } else {
            candidate.distance < current.distance
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::{Mat4, Vec3};
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::model::{ElementId, ModelBuilder, ModelGeometry, ModelId};
    use crate::options::CameraOptions;

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;

    fn viewport() -> Viewport {
        Viewport::from_size(WIDTH, HEIGHT)
    }

    fn camera() -> Camera {
        Camera::from_options(&CameraOptions::default(), WIDTH / HEIGHT)
    }

    /// Triangle in the z = 0 plane with the origin strictly inside.
    fn plate(element: u32) -> Arc<ModelGeometry> {
        let mut builder = ModelBuilder::new("plate");
        let _ = builder.push_element(
            ElementId(element),
            &[
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            &[[0, 1, 2]],
        );
        builder.build(4).unwrap()
    }

    fn cube(element: u32) -> Arc<ModelGeometry> {
        let mut builder = ModelBuilder::new("cube");
        let _ = builder.push_cuboid(
            ElementId(element),
            Vec3::splat(-0.5),
            Vec3::splat(0.5),
        );
        builder.build(4).unwrap()
    }

    #[test]
    fn center_pointer_hits_face_at_origin() {
        let mut models = ModelSet::new();
        let id = models.add_instance(plate(7), Mat4::IDENTITY);
        let caster = RayCaster::default();

        let hit = caster
            .cast(viewport().center(), &viewport(), &camera(), models.models())
            .unwrap();
        assert_eq!(hit.model_id, id);
        assert!((hit.distance - 5.0).abs() < 1e-4);
        assert!(hit.point.length() < 1e-4);
        assert_eq!(resolve(&hit, &models), Selection::new(id, ElementId(7)));
    }

    #[test]
    fn center_pointer_on_face_edge_hits() {
        // Axis-aligned quad whose x = 0 edge passes through the origin.
        let mut builder = ModelBuilder::new("panel");
        let _ = builder.push_element(
            ElementId(4),
            &[
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            &[[0, 1, 2], [0, 2, 3]],
        );
        let mut models = ModelSet::new();
        let geometry = builder.build(4).unwrap();
        let id = models.add_instance(geometry, Mat4::IDENTITY);

        let ray = camera().ray_through_ndc(Vec2::ZERO);
        let hit = RayCaster::default().cast_ray(&ray, models.models()).unwrap();
        assert_eq!(hit.model_id, id);
        assert!((hit.distance - 5.0).abs() < 1e-4);
        assert_eq!(
            RayCaster::default().pick(
                viewport().center(),
                &viewport(),
                &camera(),
                &models
            ),
            Some(Selection::new(id, ElementId(4)))
        );
    }

    #[test]
    fn empty_space_is_no_hit() {
        let mut models = ModelSet::new();
        let _ = models.add_instance(plate(1), Mat4::IDENTITY);
        let caster = RayCaster::default();
        assert!(caster
            .cast(Vec2::new(5.0, 5.0), &viewport(), &camera(), models.models())
            .is_none());
        assert!(caster
            .cast(Vec2::ZERO, &viewport(), &camera(), &[])
            .is_none());
    }

    #[test]
    fn pointer_outside_silhouette_never_hits() {
        let mut models = ModelSet::new();
        let _ = models.add_instance(
            cube(1),
            Mat4::from_translation(Vec3::new(-1.5, 0.0, 0.0)),
        );
        let _ = models.add_instance(
            cube(2),
            Mat4::from_translation(Vec3::new(1.5, 0.5, -1.0)),
        );
        let cam = camera();
        let view_proj = cam.build_matrix();
        let vp = viewport();
        let caster = RayCaster::default();

        // Screen-space rectangles enclosing each model's projected corners.
        let silhouettes: Vec<(Vec2, Vec2)> = models
            .models()
            .iter()
            .map(|model| {
                let bounds = model.world_bounds();
                let mut lo = Vec2::splat(f32::INFINITY);
                let mut hi = Vec2::splat(f32::NEG_INFINITY);
                for i in 0..8 {
                    let corner = Vec3::new(
                        if i & 1 == 0 { bounds.min.x } else { bounds.max.x },
                        if i & 2 == 0 { bounds.min.y } else { bounds.max.y },
                        if i & 4 == 0 { bounds.min.z } else { bounds.max.z },
                    );
                    let pixel = vp.ndc_to_pixel(
                        view_proj.project_point3(corner).truncate(),
                    );
                    lo = lo.min(pixel);
                    hi = hi.max(pixel);
                }
                (lo, hi)
            })
            .collect();

        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        let mut outside = 0;
        for _ in 0..2000 {
            let pointer = Vec2::new(
                rng.random_range(0.0..WIDTH),
                rng.random_range(0.0..HEIGHT),
            );
            let covered = silhouettes.iter().any(|(lo, hi)| {
                pointer.cmpge(*lo - 1.0).all() && pointer.cmple(*hi + 1.0).all()
            });
            if covered {
                continue;
            }
            outside += 1;
            assert!(
                caster.cast(pointer, &vp, &cam, models.models()).is_none(),
                "unexpected hit at {pointer}"
            );
        }
        assert!(outside > 1000);
    }

    #[test]
    fn nearest_model_wins() {
        let mut models = ModelSet::new();
        let far = models.add_instance(
            plate(1),
            Mat4::from_translation(Vec3::new(0.0, 0.0, -2.0)),
        );
        let near = models.add_instance(
            plate(2),
            Mat4::from_translation(Vec3::new(0.0, 0.0, 1.0)),
        );
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let hit = RayCaster::default().cast_ray(&ray, models.models()).unwrap();
        assert_eq!(hit.model_id, near);
        assert_ne!(hit.model_id, far);
        assert!((hit.distance - 4.0).abs() < 1e-4);
    }

    #[test]
    fn coincident_models_resolve_to_lower_id() {
        let geometry = plate(1);
        let mut models = ModelSet::new();
        let first = models.add_instance(Arc::clone(&geometry), Mat4::IDENTITY);
        let _second = models.add_instance(geometry, Mat4::IDENTITY);
        let ray = Ray::new(Vec3::new(0.1, 0.2, 5.0), Vec3::NEG_Z);
        let caster = RayCaster::default();
        for _ in 0..3 {
            let hit = caster.cast_ray(&ray, models.models()).unwrap();
            assert_eq!(hit.model_id, first);
        }
    }

    #[test]
    fn instances_are_hit_in_world_space() {
        let geometry = cube(3);
        let mut models = ModelSet::new();
        let left = models.add_instance(
            Arc::clone(&geometry),
            Mat4::from_translation(Vec3::new(-5.0, 0.0, 0.0)),
        );
        let right = models.add_instance(
            geometry,
            Mat4::from_scale_rotation_translation(
                Vec3::splat(2.0),
                glam::Quat::IDENTITY,
                Vec3::new(5.0, 0.0, 0.0),
            ),
        );
        let caster = RayCaster::default();

        let ray = Ray::new(Vec3::new(-5.0, 0.0, 10.0), Vec3::NEG_Z);
        let hit = caster.cast_ray(&ray, models.models()).unwrap();
        assert_eq!(hit.model_id, left);
        assert!((hit.distance - 9.5).abs() < 1e-4);

        // Scaled instance: front face sits at z = 1 in world space.
        let ray = Ray::new(Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z);
        let hit = caster.cast_ray(&ray, models.models()).unwrap();
        assert_eq!(hit.model_id, right);
        assert!((hit.distance - 9.0).abs() < 1e-4);
        assert!((hit.point - Vec3::new(5.0, 0.0, 1.0)).length() < 1e-4);
    }

    #[test]
    fn max_distance_limits_hits() {
        let mut models = ModelSet::new();
        let _ = models.add_instance(plate(1), Mat4::IDENTITY);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        let short = RayCaster::new(&PickingOptions {
            max_distance: 4.0,
            ..PickingOptions::default()
        });
        assert!(short.cast_ray(&ray, models.models()).is_none());
        assert!(RayCaster::default().cast_ray(&ray, models.models()).is_some());
    }

    #[test]
    fn model_set_may_grow_between_casts() {
        let mut models = ModelSet::new();
        let caster = RayCaster::default();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert!(caster.cast_ray(&ray, models.models()).is_none());
        let id = models.add_instance(plate(1), Mat4::IDENTITY);
        let hit = caster.cast_ray(&ray, models.models()).unwrap();
        assert_eq!(hit.model_id, id);
        assert_eq!(
            caster.pick(viewport().center(), &viewport(), &camera(), &models),
            Some(Selection::new(id, ElementId(1)))
        );
        assert_eq!(id, ModelId(0));
    }
}
