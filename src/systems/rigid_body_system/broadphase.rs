use crate::rigid_body::RigidBody;

/// Sort-and-sweep on the x axis; emits index pairs whose AABBs overlap.
/// Static/static pairs are skipped. Both buffers are reused between steps.
pub(super) fn find_pairs(bodies: &[RigidBody], order: &mut Vec<usize>, pairs: &mut Vec<(usize, usize)>) {
    pairs.clear();
    order.clear();
    order.extend(0..bodies.len());
    order.sort_unstable_by(|&a, &b| bodies[a].aabb.min.x.total_cmp(&bodies[b].aabb.min.x));

    for (i, &ia) in order.iter().enumerate() {
        let a = &bodies[ia];
        for &ib in order[i + 1..].iter() {
            let b = &bodies[ib];
            if b.aabb.min.x > a.aabb.max.x {
                break;
            }
            if a.is_static && b.is_static {
                continue;
            }
            if a.aabb.overlaps(&b.aabb) {
                pairs.push((ia.min(ib), ia.max(ib)));
            }
        }
    }
}
