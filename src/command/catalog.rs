use std::collections::HashMap;
use std::fmt;

use egui::Color32;

use super::Arg;
use crate::error::{EngineResult, TurtleError};
use crate::turtle::{Turtle, color_from_channels, parse_color};

/// Function invoked for an operation, receiving exactly `arity` arguments
pub type Thunk<T> = fn(&mut T, &[Arg]) -> EngineResult;

/// A named operation with a fixed number of positional arguments
pub struct Operation<T> {
    name: &'static str,
    arity: usize,
    thunk: Thunk<T>,
}

impl<T> Operation<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn invoke(&self, target: &mut T, args: &[Arg]) -> EngineResult {
        (self.thunk)(target, args)
    }
}

impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Operation<T> {}

impl<T> fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Lookup table from operation name to [`Operation`], built once up front
pub struct OperationTable<T> {
    operations: HashMap<&'static str, Operation<T>>,
}

impl<T> Default for OperationTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OperationTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationTable")
            .field("operations", &format!("<{} operations>", self.operations.len()))
            .finish()
    }
}

impl<T> OperationTable<T> {
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Register an operation under each of `names`; the first name is the canonical one
    pub fn register(&mut self, names: &[&'static str], arity: usize, thunk: Thunk<T>) -> &mut Self {
        if let Some(&canonical) = names.first() {
            for &name in names {
                self.operations.insert(
                    name,
                    Operation {
                        name: canonical,
                        arity,
                        thunk,
                    },
                );
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Operation<T>> {
        self.operations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl OperationTable<Turtle> {
    /// Every operation a turtle exposes to the command line and the controls
    pub fn turtle() -> Self {
        let mut table = Self::new();
        table
            // movement
            .register(&["forward", "fd"], 1, |t, args| {
                t.forward(number("forward", args)?);
                Ok(None)
            })
            .register(&["backward", "back", "bk"], 1, |t, args| {
                t.backward(number("backward", args)?);
                Ok(None)
            })
            .register(&["left", "lt"], 1, |t, args| {
                t.left(number("left", args)?);
                Ok(None)
            })
            .register(&["right", "rt"], 1, |t, args| {
                t.right(number("right", args)?);
                Ok(None)
            })
            .register(&["goto", "setpos", "setposition"], 1, |t, args| {
                let (x, y) = point("goto", args)?;
                t.goto(x, y);
                Ok(None)
            })
            .register(&["setx"], 1, |t, args| {
                t.set_x(number("setx", args)?);
                Ok(None)
            })
            .register(&["sety"], 1, |t, args| {
                t.set_y(number("sety", args)?);
                Ok(None)
            })
            .register(&["setheading", "seth"], 1, |t, args| {
                t.set_heading(number("setheading", args)?);
                Ok(None)
            })
            .register(&["circle"], 1, |t, args| {
                let (radius, extent) = match first("circle", args)? {
                    Arg::Tuple(parts) => match parts.as_slice() {
                        [radius, extent] => (
                            number_of("circle", radius)?,
                            Some(number_of("circle", extent)?),
                        ),
                        _ => return Err(bad("circle", "radius or radius,extent", &args[0])),
                    },
                    radius => (number_of("circle", radius)?, None),
                };
                t.circle(radius, extent)?;
                Ok(None)
            })
            .register(&["home"], 0, |t, _| {
                t.home();
                Ok(None)
            })
            // pen
            .register(&["penup", "pu", "up"], 0, |t, _| {
                t.pen_up();
                Ok(None)
            })
            .register(&["pendown", "pd", "down"], 0, |t, _| {
                t.pen_down();
                Ok(None)
            })
            .register(&["pencolor"], 1, |t, args| {
                t.set_pen_color(color("pencolor", first("pencolor", args)?)?);
                Ok(None)
            })
            .register(&["fillcolor"], 1, |t, args| {
                t.set_fill_color(color("fillcolor", first("fillcolor", args)?)?);
                Ok(None)
            })
            .register(&["color"], 1, |t, args| {
                let arg = first("color", args)?;
                let (pen, fill) = match arg {
                    Arg::Tuple(parts) if parts.len() == 2 => {
                        (color("color", &parts[0])?, color("color", &parts[1])?)
                    }
                    single => {
                        let both = color("color", single)?;
                        (both, both)
                    }
                };
                t.set_pen_color(pen);
                t.set_fill_color(fill);
                Ok(None)
            })
            .register(&["pensize", "width"], 1, |t, args| {
                t.set_pen_size(number("pensize", args)?)?;
                Ok(None)
            })
            .register(&["begin_fill"], 0, |t, _| {
                t.begin_fill();
                Ok(None)
            })
            .register(&["end_fill"], 0, |t, _| {
                t.end_fill()?;
                Ok(None)
            })
            .register(&["filling"], 0, |t, _| Ok(Some(t.filling().to_string())))
            // appearance
            .register(&["shape"], 1, |t, args| {
                let arg = first("shape", args)?;
                let name = arg.as_text().ok_or_else(|| bad("shape", "a shape name", arg))?;
                t.set_shape(name.parse()?);
                Ok(None)
            })
            .register(&["hideturtle", "ht"], 0, |t, _| {
                t.hide();
                Ok(None)
            })
            .register(&["showturtle", "st"], 0, |t, _| {
                t.show();
                Ok(None)
            })
            .register(&["isvisible"], 0, |t, _| Ok(Some(t.is_visible().to_string())))
            .register(&["speed"], 1, |t, args| {
                t.set_speed(speed(first("speed", args)?)?);
                Ok(None)
            })
            // queries
            .register(&["position", "pos"], 0, |t, _| {
                let p = t.position();
                Ok(Some(format!("({:.2},{:.2})", p.x, p.y)))
            })
            .register(&["xcor"], 0, |t, _| Ok(Some(format!("{:.2}", t.position().x))))
            .register(&["ycor"], 0, |t, _| Ok(Some(format!("{:.2}", t.position().y))))
            .register(&["heading"], 0, |t, _| Ok(Some(t.heading().to_string())))
            .register(&["isdown"], 0, |t, _| Ok(Some(t.is_down().to_string())))
            .register(&["distance"], 1, |t, args| {
                let (x, y) = point("distance", args)?;
                Ok(Some(format!("{:.2}", t.distance(x, y))))
            })
            .register(&["towards"], 1, |t, args| {
                let (x, y) = point("towards", args)?;
                Ok(Some(format!("{:.2}", t.towards(x, y))))
            })
            // canvas
            .register(&["clear"], 0, |t, _| {
                t.clear();
                Ok(None)
            })
            .register(&["reset"], 0, |t, _| {
                t.reset()?;
                Ok(None)
            })
            .register(&["degrees"], 0, |t, _| {
                t.degrees();
                Ok(None)
            })
            .register(&["radians"], 0, |t, _| {
                t.radians();
                Ok(None)
            });
        table
    }
}

fn first<'a>(operation: &'static str, args: &'a [Arg]) -> Result<&'a Arg, TurtleError> {
    args.first().ok_or_else(|| TurtleError::BadArgument {
        operation,
        expected: "an argument",
        got: "nothing".to_owned(),
    })
}

fn bad(operation: &'static str, expected: &'static str, got: &Arg) -> TurtleError {
    TurtleError::BadArgument {
        operation,
        expected,
        got: got.to_string(),
    }
}

fn number_of(operation: &'static str, arg: &Arg) -> Result<f32, TurtleError> {
    arg.as_number().ok_or_else(|| bad(operation, "a number", arg))
}

fn number(operation: &'static str, args: &[Arg]) -> Result<f32, TurtleError> {
    number_of(operation, first(operation, args)?)
}

fn point(operation: &'static str, args: &[Arg]) -> Result<(f32, f32), TurtleError> {
    let arg = first(operation, args)?;
    match arg.as_tuple() {
        Some([x, y]) => Ok((number_of(operation, x)?, number_of(operation, y)?)),
        _ => Err(bad(operation, "a point x,y", arg)),
    }
}

fn color(operation: &'static str, arg: &Arg) -> Result<Color32, TurtleError> {
    match arg {
        Arg::Text(name) => parse_color(name),
        Arg::Tuple(parts) => {
            let channels = parts
                .iter()
                .map(|part| match part {
                    Arg::Int(value) => Ok(*value),
                    other => Err(bad(operation, "integer color channels", other)),
                })
                .collect::<Result<Vec<_>, _>>()?;
            color_from_channels(&channels)
        }
        Arg::Int(_) => Err(TurtleError::BadColor(arg.to_string())),
    }
}

fn speed(arg: &Arg) -> Result<f32, TurtleError> {
    if let Some(value) = arg.as_number() {
        return Ok(value);
    }
    match arg.as_text() {
        Some("fastest") => Ok(0.0),
        Some("fast") => Ok(10.0),
        Some("normal") => Ok(6.0),
        Some("slow") => Ok(3.0),
        Some("slowest") => Ok(1.0),
        _ => Err(TurtleError::BadSpeed(arg.to_string())),
    }
}
