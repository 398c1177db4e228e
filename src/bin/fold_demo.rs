use gridlearn::baseline::MeanRegressor;
use gridlearn::{
    CrossValidation, DataContainer, MeasureAccumulator, RootMeanSquaredError, SequentialFolding,
};

fn main() {
    simple_logger::init().unwrap();

    // y = x0 + x1 over a small synthetic grid
    let mut points = Vec::new();
    let mut values = Vec::new();
    for i in 0..20 {
        let x0 = i as f64 / 20.0;
        let x1 = (i % 5) as f64;
        points.push(x0);
        points.push(x1);
        values.push(x0 + x1);
    }

    let data = DataContainer::new(points, 2, values).unwrap();
    let folds = SequentialFolding::new(data.size(), 5).unwrap();
    let cv = CrossValidation::new(&data, Box::new(folds)).unwrap();

    let result: RootMeanSquaredError<f64> = cv.run(|train, test| {
        let model: MeanRegressor = train.collect();
        let predictions: Vec<f64> = test.map(|_| model.predict()).collect();
        Box::new(predictions.into_iter())
    });

    println!("5-fold RMSE of the mean predictor: {}", result.result());
}
