use arrayvec::ArrayVec;
use na::Unit;
use num::Bounded;

use crate::math::{Point, Real, Vector};
use crate::query::closest_points::{
    closest_points_line_line_parameters, closest_points_segment_segment,
};
use crate::query::sat::TriangleConfiguration;
use crate::query::QueryTolerances;
use crate::shape::{FeatureId, Triangle};

/// Options of the triangle-triangle contact generator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleTriangleOptions {
    /// Only keep contacts on the front side (the side `AB × AC` points to) of the first
    /// triangle.
    pub one_sided_a: bool,
    /// Only keep contacts on the front side of the second triangle.
    pub one_sided_b: bool,
}

/// A contact between two triangles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleTriangleContact {
    /// The contact point, in world-space.
    pub point: Point<Real>,
    /// The contact normal, pointing from the second triangle toward the first.
    pub normal: Unit<Vector<Real>>,
    /// The penetration depth along `normal`.
    pub depth: Real,
    /// The feature of the first triangle involved in the contact.
    pub feature_a: FeatureId,
    /// The feature of the second triangle involved in the contact.
    pub feature_b: FeatureId,
}

/// The result of the triangle-triangle contact generator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TriangleContact {
    /// The triangles are separated.
    None,
    /// The triangles intersect.
    Contact(TriangleTriangleContact),
    /// The triangles intersect but the contact was rejected because it would push a one-sided
    /// triangle toward its back side.
    Discarded,
}

impl TriangleContact {
    /// Do the triangles intersect, even if the contact was discarded?
    #[inline]
    pub fn has_contact(&self) -> bool {
        !matches!(self, TriangleContact::None)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axis {
    FaceA,
    FaceB,
    Edges(usize, usize),
}

#[derive(Copy, Clone, Debug)]
struct Candidate {
    depth: Real,
    // Points from the second triangle toward the first.
    normal: Unit<Vector<Real>>,
    axis: Axis,
}

/// Computes the contact between two triangles using the separating axis theorem.
///
/// Both triangles are expressed in the same space. The candidate axes are the two face normals
/// and the nine cross products between the edges of both triangles. Axes with a near-zero
/// length (parallel edges, degenerate triangles) are skipped. If both triangles are coplanar,
/// the six in-plane normals of their edges are also tested so that disjoint coplanar
/// triangles are found separated.
///
/// If no axis separates the triangles, the axis with the smallest penetration depth is
/// selected, preferring face axes unless an edge-edge axis penetrates less by more than the
/// tolerance. The contact point is then reconstructed:
///
/// * for a face axis, from the deepest vertex of the other triangle (or the vertex tied with
///   it), moved back by half the penetration depth. If the vertex does not project inside of
///   the face, the contact is computed from the best edge pair, or by clipping the triangles
///   against each other if they are coplanar.
/// * for an edge-edge axis, as the midpoint of the closest points between both edge lines, if
///   they lie on both edges. Otherwise the face contact is used instead.
///
/// If everything else fails, the midpoint of the closest points between the closest pair of
/// edges is used.
///
/// The result is antisymmetric: swapping both triangles yields the same depth and the
/// opposite normal.
pub fn triangle_triangle_contact(
    tri_a: &Triangle,
    tri_b: &Triangle,
    options: &TriangleTriangleOptions,
    tolerances: &QueryTolerances,
) -> TriangleContact {
    let size = max_edge_length(tri_a).max(max_edge_length(tri_b));
    let eps = tolerances.scaled_epsilon(size);
    let rel_eps = tolerances.epsilon;
    let normal_a = tri_a.normal();
    let normal_b = tri_b.normal();
    let edges_a = tri_a.edges_scaled_directions();
    let edges_b = tri_b.edges_scaled_directions();

    let mut best_face: Option<Candidate> = None;
    let mut best_edge: Option<Candidate> = None;

    for (normal, axis) in [(normal_a, Axis::FaceA), (normal_b, Axis::FaceB)] {
        if let Some(normal) = normal {
            match penetration_along_axis(tri_a, tri_b, &normal, eps) {
                Some((depth, normal)) => keep_shallowest(&mut best_face, depth, normal, axis),
                None => return TriangleContact::None,
            }
        }
    }

    for (i, edge_a) in edges_a.iter().enumerate() {
        for (j, edge_b) in edges_b.iter().enumerate() {
            let axis = edge_a.cross(edge_b);
            let min_sq_len = rel_eps * rel_eps * edge_a.norm_squared() * edge_b.norm_squared();

            if axis.norm_squared() <= min_sq_len {
                continue;
            }

            let axis = Unit::new_normalize(axis);
            match penetration_along_axis(tri_a, tri_b, &axis, eps) {
                Some((depth, normal)) => {
                    keep_shallowest(&mut best_edge, depth, normal, Axis::Edges(i, j))
                }
                None => return TriangleContact::None,
            }
        }
    }

    let coplanar_normal = match (normal_a, normal_b) {
        (Some(na), Some(nb)) if na.cross(&nb).norm_squared() <= rel_eps * rel_eps => Some(na),
        _ => None,
    };

    if let Some(plane_normal) = coplanar_normal {
        for edge in edges_a.iter().chain(edges_b.iter()) {
            if let Some(axis) = Unit::try_new(plane_normal.cross(edge), eps * rel_eps) {
                if penetration_along_axis(tri_a, tri_b, &axis, eps).is_none() {
                    return TriangleContact::None;
                }
            }
        }
    }

    let primary = match (best_face, best_edge) {
        (Some(face), Some(edge)) => {
            if edge.depth < face.depth - eps {
                edge
            } else {
                face
            }
        }
        (Some(face), None) => face,
        (None, Some(edge)) => edge,
        (None, None) => {
            log::debug!("Triangle-triangle SAT: no valid axis between {tri_a:?} and {tri_b:?}.");
            return TriangleContact::None;
        }
    };

    if options.one_sided_a && normal_a.is_some_and(|n| primary.normal.dot(&n) > rel_eps) {
        return TriangleContact::Discarded;
    }

    if options.one_sided_b && normal_b.is_some_and(|n| primary.normal.dot(&n) < -rel_eps) {
        return TriangleContact::Discarded;
    }

    let located = match primary.axis {
        Axis::FaceA | Axis::FaceB => {
            face_contact(tri_a, tri_b, &primary, coplanar_normal, eps, rel_eps).or_else(|| {
                best_edge.and_then(|edge| edge_edge_contact(tri_a, tri_b, edge.axis, rel_eps))
            })
        }
        Axis::Edges(..) => edge_edge_contact(tri_a, tri_b, primary.axis, rel_eps).or_else(|| {
            best_face.and_then(|face| {
                face_contact(tri_a, tri_b, &face, coplanar_normal, eps, rel_eps)
            })
        }),
    };

    let (point, feature_a, feature_b) =
        located.unwrap_or_else(|| closest_edges_contact(tri_a, tri_b));

    TriangleContact::Contact(TriangleTriangleContact {
        point,
        normal: primary.normal,
        depth: primary.depth,
        feature_a,
        feature_b,
    })
}

fn max_edge_length(tri: &Triangle) -> Real {
    tri.edges_scaled_directions()
        .iter()
        .map(|e| e.norm())
        .fold(0.0, Real::max)
}

// The smallest penetration depth along `axis`, and the corresponding normal pointing from
// `tri_b` toward `tri_a`. Returns `None` if `axis` separates the triangles.
//
// Depths closer than `eps` are tied, see `tied_normal`.
fn penetration_along_axis(
    tri_a: &Triangle,
    tri_b: &Triangle,
    axis: &Unit<Vector<Real>>,
    eps: Real,
) -> Option<(Real, Unit<Vector<Real>>)> {
    let config_a = TriangleConfiguration::new(tri_a, axis);
    let config_b = TriangleConfiguration::new(tri_b, axis);

    // Distance to move `tri_a` along `+axis` (resp. `-axis`) to separate the triangles.
    let depth_pos = config_b.max_proj - config_a.min_proj;
    let depth_neg = config_a.max_proj - config_b.min_proj;

    if depth_pos < 0.0 || depth_neg < 0.0 {
        None
    } else if (depth_pos - depth_neg).abs() <= eps {
        Some((depth_pos.min(depth_neg), tied_normal(tri_a, tri_b, axis, eps)))
    } else if depth_pos < depth_neg {
        Some((depth_pos, *axis))
    } else {
        Some((depth_neg, -*axis))
    }
}

// Orients `axis` when both directions penetrate equally, e.g. for coplanar triangles.
//
// The result is negated when the triangles are swapped, whatever the sign of `axis`: it points
// from the centroid of `tri_b` toward the centroid of `tri_a` or, if they are level along
// `axis`, it is the canonical direction of `axis` signed by the lexicographic order of the
// triangle vertices.
fn tied_normal(
    tri_a: &Triangle,
    tri_b: &Triangle,
    axis: &Unit<Vector<Real>>,
    eps: Real,
) -> Unit<Vector<Real>> {
    let offset = (tri_a.center() - tri_b.center()).dot(axis);

    if offset.abs() > eps {
        return if offset > 0.0 { *axis } else { -*axis };
    }

    let canonical = if axis[axis.iamax()] > 0.0 {
        *axis
    } else {
        -*axis
    };

    let coords_a = tri_a.vertices().into_iter().flat_map(|p| [p.x, p.y, p.z]);
    let coords_b = tri_b.vertices().into_iter().flat_map(|p| [p.x, p.y, p.z]);
    let a_first = coords_a
        .zip(coords_b)
        .find(|(a, b)| a != b)
        .map(|(a, b)| a < b)
        .unwrap_or(true);

    if a_first {
        canonical
    } else {
        -canonical
    }
}

fn keep_shallowest(
    best: &mut Option<Candidate>,
    depth: Real,
    normal: Unit<Vector<Real>>,
    axis: Axis,
) {
    if best.map(|b| depth < b.depth).unwrap_or(true) {
        *best = Some(Candidate {
            depth,
            normal,
            axis,
        });
    }
}

type LocatedContact = (Point<Real>, FeatureId, FeatureId);

fn face_contact(
    tri_a: &Triangle,
    tri_b: &Triangle,
    face: &Candidate,
    coplanar_normal: Option<Unit<Vector<Real>>>,
    eps: Real,
    rel_eps: Real,
) -> Option<LocatedContact> {
    let (reference, incident, into_reference) = if face.axis == Axis::FaceA {
        (tri_a, tri_b, *face.normal)
    } else {
        (tri_b, tri_a, -*face.normal)
    };

    let config = TriangleConfiguration::new(incident, &into_reference);
    let vertices = incident.vertices();
    let mut deepest = ArrayVec::<usize, 2>::new();
    deepest.push(config.max);

    if config.max_proj - config.mid_proj <= eps {
        deepest.push(config.mid);
    }

    for vid in deepest {
        let vertex = vertices[vid];
        let inside = reference
            .barycentric_coordinates(&vertex)
            .is_some_and(|bcoords| bcoords.iter().all(|c| *c >= -rel_eps));

        if inside {
            let point = vertex - into_reference * (face.depth * 0.5);
            let (feature_ref, feature_inc) = (FeatureId::Face(0), FeatureId::Vertex(vid as u32));

            return Some(if face.axis == Axis::FaceA {
                (point, feature_ref, feature_inc)
            } else {
                (point, feature_inc, feature_ref)
            });
        }
    }

    let plane_normal = coplanar_normal?;
    let point = coplanar_contact(tri_a, tri_b, &plane_normal, rel_eps)?;
    Some((point, FeatureId::Face(0), FeatureId::Face(0)))
}

// Averages the vertices of each triangle lying inside of the other, and the intersections
// between their edges.
fn coplanar_contact(
    tri_a: &Triangle,
    tri_b: &Triangle,
    plane_normal: &Unit<Vector<Real>>,
    rel_eps: Real,
) -> Option<Point<Real>> {
    let mut sum = Vector::zeros();
    let mut count = 0;

    let inside = |tri: &Triangle, pt: &Point<Real>| {
        tri.barycentric_coordinates(pt)
            .is_some_and(|bcoords| bcoords.iter().all(|c| *c >= -rel_eps))
    };

    for (tri, other) in [(tri_a, tri_b), (tri_b, tri_a)] {
        for vertex in tri.vertices() {
            if inside(other, &vertex) {
                sum += vertex.coords;
                count += 1;
            }
        }
    }

    for edge_a in tri_a.edges() {
        for edge_b in tri_b.edges() {
            if let Some((s, t)) = closest_points_line_line_parameters(&edge_a, &edge_b, rel_eps)
            {
                if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
                    sum += edge_a.point_at(s).coords;
                    count += 1;
                }
            }
        }
    }

    if count == 0 {
        log::debug!(
            "Triangle-triangle SAT: empty coplanar overlap along {:?}.",
            plane_normal
        );
        None
    } else {
        Some(Point::from(sum / count as Real))
    }
}

fn edge_edge_contact(
    tri_a: &Triangle,
    tri_b: &Triangle,
    axis: Axis,
    rel_eps: Real,
) -> Option<LocatedContact> {
    let Axis::Edges(i, j) = axis else {
        return None;
    };

    let edge_a = tri_a.edges()[i];
    let edge_b = tri_b.edges()[j];
    let (s, t) = closest_points_line_line_parameters(&edge_a, &edge_b, rel_eps)?;
    let range = -rel_eps..=1.0 + rel_eps;

    if !range.contains(&s) || !range.contains(&t) {
        return None;
    }

    let pa = edge_a.point_at(s.clamp(0.0, 1.0));
    let pb = edge_b.point_at(t.clamp(0.0, 1.0));

    Some((
        na::center(&pa, &pb),
        FeatureId::Edge(i as u32),
        FeatureId::Edge(j as u32),
    ))
}

fn closest_edges_contact(tri_a: &Triangle, tri_b: &Triangle) -> LocatedContact {
    let mut best = (
        <Real as Bounded>::max_value(),
        Point::origin(),
        FeatureId::Unknown,
        FeatureId::Unknown,
    );

    for (i, edge_a) in tri_a.edges().iter().enumerate() {
        for (j, edge_b) in tri_b.edges().iter().enumerate() {
            let (pa, pb) = closest_points_segment_segment(edge_a, edge_b);
            let dist = na::distance_squared(&pa, &pb);

            if dist < best.0 {
                best = (
                    dist,
                    na::center(&pa, &pb),
                    FeatureId::Edge(i as u32),
                    FeatureId::Edge(j as u32),
                );
            }
        }
    }

    (best.1, best.2, best.3)
}
