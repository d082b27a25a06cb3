use crate::{PipeId, ProcessView, TankId};

pub fn print_tank_overview(view: &ProcessView) {
    println!(">> Tanks:");
    println!("  {:<6} {:>10} {:>10} {:>6}", "ID", "Quantity", "Capacity", "Fill");
    println!("{}", "-".repeat(6 + 10 * 2 + 6 + 5));

    for &id in TankId::ALL.iter() {
        let tank = view.tank(id);
        println!(
            "  {:<6} {:>10.3} {:>10.1} {:>5}%",
            tank.label(),
            tank.quantity(),
            tank.capacity(),
            tank.percent(),
        );
    }

    println!(
        "Total Quantity: {:.3}",
        view.tanks().iter().map(|t| t.quantity()).sum::<f64>()
    );
}

pub fn print_process_overview(view: &ProcessView) {
    println!(
        ">> Process: {:?}, speed {}, pump angle {:.1} deg",
        view.state(),
        view.speed(),
        view.pump().angle()
    );
    print_tank_overview(view);

    let flowing = PipeId::ALL
        .iter()
        .filter(|&&id| view.pipe(id).is_flowing())
        .map(|id| format!("{id:?}"))
        .collect::<Vec<_>>();
    println!(">> Flowing pipes: [{}]", flowing.join(", "));
}
