use approx::assert_relative_eq;
use ndarray::{arr0, Array1};
use penman_rs::canopy::{
    active_leaf_area_index, displacement_height, heat_roughness,
    leaf_area_index, momentum_roughness,
};
use penman_rs::vectorized::{self, WeatherArrays};
use penman_rs::{
    aerodynamic_resistance, crop_evapotranspiration, penman_monteith,
    surface_resistance, AerodynamicConfig, CropGeometry, DomainError,
    EtConfig, Error, MeasurementHeights, PenmanMonteith, RadiationBalance,
    VaporPressureState, Weather,
};

fn weather(temperature: f64) -> Weather {
    Weather {
        temperature,
        wind_speed: 2.0,
        pressure: 101.3,
        radiation: RadiationBalance::daily(15.0),
        vapour: VaporPressureState {
            saturation: 2.4,
            actual: 1.4,
            slope: 0.15,
        },
        psychrometric_constant: 0.067,
    }
}

#[test]
fn geometry_chain_by_hand() {
    let h = 0.12;
    let d = displacement_height(h).unwrap();
    let zom = momentum_roughness(h).unwrap();
    let zoh = heat_roughness(zom).unwrap();
    let lai_active = active_leaf_area_index(leaf_area_index(h).unwrap()).unwrap();

    let ra = aerodynamic_resistance(d, zom, zoh, 2.0, &AerodynamicConfig::default())
        .unwrap();
    let expected = ((10.0_f64 - d) / zom).ln() * ((2.0_f64 - d) / zoh).ln()
        / (0.41 * 0.41 * 2.0);
    assert_relative_eq!(ra, expected, max_relative = 1e-9);

    let rs = surface_resistance(lai_active, 100.0).unwrap();
    assert_relative_eq!(rs, 100.0 / (0.5 * 24.0 * h), max_relative = 1e-12);
}

#[test]
fn documented_failures() {
    let config = AerodynamicConfig::default();
    assert!(surface_resistance(0.0, 100.0).is_err());
    assert!(aerodynamic_resistance(0.08, 0.01476, 0.001476, 0.0, &config).is_err());

    let low = AerodynamicConfig {
        heights: MeasurementHeights {
            wind: 0.08,
            humidity: 2.0,
        },
        ..config
    };
    assert!(matches!(
        aerodynamic_resistance(0.08, 0.01476, 0.001476, 2.0, &low),
        Err(DomainError::BelowDisplacement { .. })
    ));

    let inputs = PenmanMonteith::new(
        2.45,
        RadiationBalance::daily(15.0),
        weather(20.0).vapour,
        0.067,
        0.0,
        1.2,
    );
    assert_eq!(
        penman_monteith(&inputs),
        Err(DomainError::ZeroAerodynamicResistance)
    );
}

#[test]
fn vectorized_chain_matches_scalar_chain() {
    let temperatures = Array1::linspace(-10.0, 40.0, 11).into_dyn();
    let scalar = |x: f64| arr0(x).into_dyn();
    let (ws, pres, rn, g, es, ea, delta, psy) = (
        scalar(2.0),
        scalar(101.3),
        scalar(15.0),
        scalar(0.0),
        scalar(2.4),
        scalar(1.4),
        scalar(0.15),
        scalar(0.067),
    );
    let config = EtConfig::default();
    let et = vectorized::crop_evapotranspiration(
        &WeatherArrays {
            temperature: temperatures.view(),
            wind_speed: ws.view(),
            pressure: pres.view(),
            net_radiation: rn.view(),
            soil_heat_flux: g.view(),
            saturation_vapour_pressure: es.view(),
            actual_vapour_pressure: ea.view(),
            svp_slope: delta.view(),
            psychrometric_constant: psy.view(),
        },
        &config,
    )
    .unwrap();

    assert_eq!(et.shape(), temperatures.shape());
    for (&t, &value) in temperatures.iter().zip(et.iter()) {
        assert_eq!(value, crop_evapotranspiration(&weather(t), &config).unwrap());
    }
}

#[test]
fn vectorized_failure_reports_element() {
    let temperatures = Array1::from_vec(vec![20.0, -300.0, 25.0]).into_dyn();
    let pres = arr0(101.3).into_dyn();
    assert_eq!(
        vectorized::air_density(pres.view(), temperatures.view()),
        Err(Error::Element {
            index: 1,
            source: DomainError::AbsoluteZero(-300.0),
        })
    );
}

#[test]
fn concurrent_callers_agree() {
    let config = EtConfig::default();
    let expected = crop_evapotranspiration(&weather(20.0), &config).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(move || {
                crop_evapotranspiration(&weather(20.0), &config).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn taller_crop_changes_both_resistances() {
    let grass = CropGeometry::default();
    let alfalfa = CropGeometry::new(0.5).unwrap();
    let config = AerodynamicConfig::default();
    assert!(
        alfalfa.aerodynamic_resistance(2.0, &config).unwrap()
            < grass.aerodynamic_resistance(2.0, &config).unwrap()
    );
    assert!(
        alfalfa.surface_resistance(100.0).unwrap()
            < grass.surface_resistance(100.0).unwrap()
    );
}

#[test]
fn tall_canopy_reaching_humidity_sensor_is_rejected() {
    let config = EtConfig {
        crop_height: 2.96,
        ..Default::default()
    };
    assert!(matches!(
        crop_evapotranspiration(&weather(20.0), &config),
        Err(DomainError::WithinRoughnessLayer {
            name: "humidity measurement",
            ..
        })
    ));
}
