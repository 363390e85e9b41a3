/// Squared Euclidean distance between two points
pub fn squared_distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    dx * dx + dy * dy
}

/// Inverse-square attraction on the mass at `pos_i` due to the mass at `pos_j`.
/// Returns [fx, fy], or `None` when the two positions coincide.
pub fn gravity_force(
    pos_i: [f64; 2],
    mass_i: f64,
    pos_j: [f64; 2],
    mass_j: f64,
    g: f64,
    multiplier: f64,
) -> Option<[f64; 2]> {
    let r2 = squared_distance(pos_i, pos_j);
    if r2 == 0.0 {
        return None;
    }
    let r = r2.sqrt();
    let dir = [(pos_j[0] - pos_i[0]) / r, (pos_j[1] - pos_i[1]) / r];

    Some([
        multiplier * dir[0] * g * mass_i * mass_j / r2,
        multiplier * dir[1] * g * mass_i * mass_j / r2,
    ])
}
