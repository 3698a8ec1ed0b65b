/// Two numeric features and a numeric label.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub value: Option<f64>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, value: None }
    }

    pub fn labeled(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Two numeric features and a categorical label.
#[derive(Debug, Clone, PartialEq)]
pub struct Fruit {
    pub weight: f64,
    pub sweetness: f64,
    pub kind: Option<String>,
}

impl Fruit {
    pub fn new(weight: f64, sweetness: f64) -> Self {
        Self {
            weight,
            sweetness,
            kind: None,
        }
    }
}
