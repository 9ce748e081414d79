use mechcas::prelude::eom;

fn main() {
    let lagrangian = "1/2*rhoA*diff(w(x, t), t)^2 - 1/2*EI*diff(w(x, t), x, x)^2";
    let load = "q";

    match eom(lagrangian, load) {
        Ok(result) => println!("{result} = 0"),
        Err(err) => eprintln!("equation of motion for {lagrangian}: {err}"),
    }
}
