use std::io;

use inference_helpers::{classifier::mock_classifier::MockClassifier, logging, output};

fn main() {
    logging::init();

    let mut classifier = MockClassifier::new();
    let response = classifier.respond_to_reader(&mut io::stdin().lock());

    output::emit(&response);
}
