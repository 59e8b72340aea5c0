use boolmask::config::ConfigManager;
use boolmask::types::Comparison;
use boolmask::{Evaluator, Operand};

const CONFIG_PATH: &str = "boolmask.toml";

fn show(label: &str, result: boolmask::Result<Operand>) {
    match result {
        Ok(value) => println!("{}\n{}", label, value),
        Err(e) => println!("{}\nError: {}", label, e),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    manager.load_layered(CONFIG_PATH)?;
    let evaluator = Evaluator::new(manager.get().evaluation);

    let x = Operand::Int(10);
    let below = evaluator.compare(&x, Comparison::Less, &Operand::Int(8))?;
    let above = evaluator.compare(&x, Comparison::Greater, &Operand::Int(15))?;
    show("x < 8 and x > 15", evaluator.logical_and(&below, &above));

    let a = Operand::list([1i64, 2, 3, 4, 5, 6, 7, 8, 9]);
    let b = Operand::list([3i64, 4, 5, 6, 7, 8, 9, 1, 2]);

    // Plain lists do not compare elementwise.
    show(
        "logical_and(a > 3, a < 6)",
        evaluator
            .compare(&a, Comparison::Greater, &Operand::Int(3))
            .and_then(|gt| {
                let lt = evaluator.compare(&a, Comparison::Less, &Operand::Int(6))?;
                evaluator.logical_and(&gt, &lt)
            }),
    );

    let a_np = a.into_array()?;
    let b_np = b.into_array()?;

    let gt = evaluator.call("Gt", &[a_np.clone(), Operand::Int(3)])?;
    let lt = evaluator.call("Lt", &[a_np, Operand::Int(6)])?;
    show("logical_and(a_np > 3, a_np < 6)", evaluator.logical_and(&gt, &lt));

    let b_lt = evaluator.call("Lt", &[b_np, Operand::Int(6)])?;
    show("logical_and(a_np > 3, b_np < 6)", evaluator.call("And", &[gt, b_lt]));

    Ok(())
}
