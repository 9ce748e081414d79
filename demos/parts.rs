use mechcas::prelude::int_parts;

fn main() {
    for (u, dv) in [("x", "1"), ("x", "diff(w(x, t), x, x)"), ("w(x, t)", "diff(w(x, t), x, x)")] {
        match int_parts(u, dv) {
            Ok(result) => println!("int_0^L {u} * {dv} dx = {result}"),
            Err(err) => eprintln!("int_0^L {u} * {dv} dx: {err}"),
        }
    }
}
