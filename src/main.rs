// Demo binary: trains one sigmoid neuron on the four hardwired samples and
// prints each stage of the run. The label a sample should get is simply its
// first feature, so the trained neuron must learn to ignore the other three.
use perceptron_nn::{Matrix, Perceptron, ShapeError, TrainConfig, Trainer};

fn main() {
    if let Err(err) = run() {
        eprintln!("shape error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ShapeError> {
    let training_inputs = Matrix::from_rows(vec![
        vec![0.0, 0.0, 1.0, 1.0],
        vec![1.0, 1.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0, 1.0],
        vec![0.0, 1.0, 1.0, 1.0],
    ])?;
    let training_targets = Matrix::from_rows(vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]])?;

    let layer = Perceptron::new(1, 4, 1);

    // Weights print transposed: one row per input feature.
    println!("\nRandom weights:");
    println!("{}", layer.weights().transpose());

    let mut trainer = Trainer::new(
        layer,
        training_inputs,
        training_targets,
        TrainConfig::default(),
    )?;

    println!("\nOutputs of neurons:");
    println!("{}", trainer.infer(trainer.inputs())?);

    trainer.train()?;

    println!("\nWeights after training:");
    println!("{}", trainer.weights().transpose());

    // The last epoch's output as recorded, not recomputed from the final
    // weights.
    println!("\nOutput after training:");
    if let Some(output) = trainer.last_output() {
        println!("{output}");
    }

    let new_situation = Matrix::from_rows(vec![vec![0.0, 0.0, 0.0, 1.0]])?;
    println!("\nNew situation:");
    println!("{}", trainer.infer(&new_situation)?);

    Ok(())
}
