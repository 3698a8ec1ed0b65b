use crate::descriptor::{Descriptor, LabelKind, LabelProperty, LabelValue};
use crate::testing::dummies::{Fruit, Point};

pub fn unlabeled_point_descriptor() -> Descriptor<Point> {
    Descriptor::new("point")
        .with_feature("x", |p: &Point| p.x)
        .with_feature("y", |p: &Point| p.y)
}

pub fn point_descriptor() -> Descriptor<Point> {
    unlabeled_point_descriptor().with_label(LabelProperty::new(
        "value",
        LabelKind::Numeric,
        |p: &Point| p.value.map(LabelValue::Number),
        |p: &mut Point, v| {
            p.value = Some(f64::try_from(v)?);
            Ok(())
        },
    ))
}

pub fn fruit_descriptor() -> Descriptor<Fruit> {
    Descriptor::new("fruit")
        .with_feature("weight", |f: &Fruit| f.weight)
        .with_feature("sweetness", |f: &Fruit| f.sweetness)
        .with_label(LabelProperty::new(
            "kind",
            LabelKind::Categorical(vec!["apple".into(), "pear".into(), "plum".into()]),
            |f: &Fruit| f.kind.clone().map(LabelValue::Category),
            |f: &mut Fruit, v| {
                f.kind = Some(String::try_from(v)?);
                Ok(())
            },
        ))
}
