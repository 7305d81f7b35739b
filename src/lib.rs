pub mod approximation {
    pub mod approximator;
    pub mod chebyshevlagrangeapproximator;
    pub mod directpolynomialapproximator;
}

pub mod codec {
    pub mod codecerror;
    pub mod bigendian;
    pub mod binarycurvecodec;
}

pub mod configuration;

pub mod conversion;

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod nonparametriccurve {
            pub mod nonparametriccurve;
            pub mod lagrangepolynomial;
        }
        pub mod parametriccurve {
            pub mod polynomial;
        }
    }
    pub mod chebyshev;
    pub mod round;
}

pub mod model {
    pub mod curve {
        pub mod controlpoint;
        pub mod tonecurve;
        pub mod curveset;
    }
}

pub mod text {
    pub mod curvewarning;
    pub mod textparseerror;
    pub mod textcurveparser;
}
