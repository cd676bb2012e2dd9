#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Meat,
    HotStarter,
    ReadyMeal,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Meat, Category::HotStarter, Category::ReadyMeal];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Meat => write!(f, "meat"),
            Category::HotStarter => write!(f, "hot_starter"),
            Category::ReadyMeal => write!(f, "ready_meal"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meat" => Ok(Category::Meat),
            "hot_starter" => Ok(Category::HotStarter),
            "ready_meal" => Ok(Category::ReadyMeal),
            _ => Err(format!("Invalid dish category: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PreparationMethod {
    Microwave,
    Oven,
    FryingPan,
}

impl PreparationMethod {
    pub const ALL: [PreparationMethod; 3] = [
        PreparationMethod::Microwave,
        PreparationMethod::Oven,
        PreparationMethod::FryingPan,
    ];
}

impl std::fmt::Display for PreparationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreparationMethod::Microwave => write!(f, "microwave"),
            PreparationMethod::Oven => write!(f, "oven"),
            PreparationMethod::FryingPan => write!(f, "frying_pan"),
        }
    }
}

impl std::str::FromStr for PreparationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "microwave" => Ok(PreparationMethod::Microwave),
            "oven" => Ok(PreparationMethod::Oven),
            "frying_pan" => Ok(PreparationMethod::FryingPan),
            _ => Err(format!("Invalid preparation method: {}", s)),
        }
    }
}
