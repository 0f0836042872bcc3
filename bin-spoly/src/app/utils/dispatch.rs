macro_rules! dispatch_float {
    ($app:ident, $args:expr $(, $extra:expr)*) => {{
        use crate::app::utils::dispatch::*;

        match $args.c_type {
            CType::F32 => run!(f32, $app, $args $(, $extra)*),
            CType::F64 => run!(f64, $app, $args $(, $extra)*),
        }
    }};
}

macro_rules! run {
    ($c_type:ty, $app:ident, $args:expr $(, $extra:expr)*) => {{
        let mut app: $app<$c_type> = $app::new($args.clone() $(, $extra)*);
        app.run()
    }}
}

pub(crate) use {dispatch_float, run};
