use mechcas::{Displacement, parse_expr, pretty, zero};

fn main() {
    // Timoshenko kinematics: u = -z*phi(x), w = w(x)
    let field = match (parse_expr("-z*phi(x)"), parse_expr("w(x)")) {
        (Ok(u), Ok(w)) => Displacement::new(u, zero(), w),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("parse error: {err}");
            return;
        }
    };

    for (name, strain) in field.strains().components() {
        println!("strain_{name} = {}", pretty(strain));
    }
    for (name, stress) in field.stresses().components() {
        println!("stress_{name} = {}", pretty(stress));
    }
}
