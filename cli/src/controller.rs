use std::marker::PhantomData;

// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I> {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub trait TryIntake<I> {
    type To;
    type Error;
    fn emit(&self, input: I) -> Result<Self::To, Self::Error>;
}

pub trait Exhaust<I> {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub struct Controller<T, P, I, D, O> {
    transformer: T,
    presenter: P,
    _i: PhantomData<I>,
    _t: PhantomData<D>,
    _o: PhantomData<O>,
}

impl<T, P, I, D, O> Controller<T, P, I, D, O> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
            _i: PhantomData,
            _t: PhantomData,
            _o: PhantomData,
        }
    }

    fn preset(self) -> P {
        self.presenter
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: Intake<I, To = D>,
{
    pub fn intake(self, input: I) -> Transformed<T, P, I, D, O> {
        Transformed {
            transformed: Intake::emit(&self.transformer, input),
            controller: self,
        }
    }
}

impl<T, P, I, D, O> Controller<T, P, I, D, O>
where
    T: TryIntake<I, To = D>,
{
    pub fn try_intake(self, input: I) -> Result<Transformed<T, P, I, D, O>, T::Error> {
        Ok(Transformed {
            transformed: TryIntake::emit(&self.transformer, input)?,
            controller: self,
        })
    }
}

impl<P, O> Controller<(), P, (), (), O>
where
    P: Exhaust<O>,
{
    pub fn bypass<F, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Result<O, E>,
    {
        Ok(self.preset().emit(f()?))
    }
}

pub struct Transformed<T, P, I, D, O> {
    transformed: D,
    controller: Controller<T, P, I, D, O>,
}

impl<T, P, I, D, O> Transformed<T, P, I, D, O>
where
    P: Exhaust<O>,
{
    pub fn handle<F, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Result<O, E>,
    {
        Ok(self.controller.preset().emit(f(self.transformed)?))
    }
}

#[cfg(test)]
mod test {
    use crate::controller::{Controller, Exhaust, Intake, TryIntake};

    struct Doubler;

    impl Intake<i32> for Doubler {
        type To = i32;
        fn emit(&self, input: i32) -> Self::To {
            input * 2
        }
    }

    impl TryIntake<&str> for Doubler {
        type To = i32;
        type Error = String;
        fn emit(&self, input: &str) -> Result<Self::To, Self::Error> {
            input
                .parse::<i32>()
                .map(|value| value * 2)
                .map_err(|_| format!("not a number: {input}"))
        }
    }

    struct Printer;

    impl Exhaust<i32> for Printer {
        type To = String;
        fn emit(&self, input: i32) -> Self::To {
            format!("= {input}")
        }
    }

    #[test]
    fn input_flows_through_transformer_and_presenter() {
        let out: Result<String, ()> = Controller::new(Doubler, Printer)
            .intake(4)
            .handle(|value| Ok(value + 1));
        assert_eq!(out, Ok("= 9".to_string()));

        let failed = Controller::<_, _, _, _, i32>::new(Doubler, Printer)
            .try_intake("four")
            .map(|_| ());
        assert_eq!(failed.err(), Some("not a number: four".to_string()));

        let bypassed: Result<String, ()> = Controller::new((), Printer).bypass(|| Ok(7));
        assert_eq!(bypassed, Ok("= 7".to_string()));
    }
}
