//! Published coefficient tables of the NEMO polynomial equations of state
//! (Roquet et al. 2015): the fit to TEOS-10 in absolute salinity and
//! conservative temperature, and the fit to EOS-80 in practical salinity and
//! potential temperature. The derivative tables are exact derivatives of the
//! density tables; the salinity derivative is stored before its division by
//! `zs`.

use super::polynomial::Polynomial;

/// Coefficients of the reference profile `r0(zh)`, common to both fits.
pub const REFERENCE_PROFILE: [f64; 6] = [
    4.6494977072e+01,
    -5.2099962525,
    2.2601900708e-01,
    6.4326772569e-02,
    1.5616995503e-02,
    -1.7243708991e-03,
];




pub static TEOS10: Polynomial = Polynomial {
    rdelta_s: 32.0,
    r1_s0: 0.875 / 35.16504,
    r1_t0: 1.0 / 40.0,
    r1_z0: 1.0e-4,
    density: [
        &[
            &[8.0189615746e+02, 8.6672408165e+02, -1.7864682637e+03, 2.0375295546e+03, -1.2849161071e+03, 4.3227585684e+02, -6.0579916612e+01],
            &[2.6010145068e+01, -6.5281885265e+01, 8.1770425108e+01, -5.6888046321e+01, 1.7681814114e+01, -1.9193502195],
            &[-3.7074170417e+01, 6.1548258127e+01, -6.0362551501e+01, 2.9130021253e+01, -5.4723692739],
            &[2.1661789529e+01, -3.3449108469e+01, 1.9717078466e+01, -3.1742946532],
            &[-8.3627885467, 1.1311538584e+01, -5.3563304045],
            &[5.4048723791e-01, 4.8169980163e-01],
            &[-1.9083568888e-01],
        ],
        &[
            &[1.9681925209e+01, -4.2549998214e+01, 5.0774768218e+01, -3.0938076334e+01, 6.6051753097],
            &[-1.3336301113e+01, -4.4870114575, 5.0042598061, -6.5399043664e-01],
            &[6.7080479603, 3.5063081279, -1.8795372996],
            &[-2.4649669534, -5.5077101279e-01],
            &[5.5927935970e-01],
        ],
        &[
            &[2.0660924175, -4.9527603989, 2.5019633244],
            &[2.0564311499, -2.1311365518e-01],
            &[-1.2419983026],
        ],
        &[
            &[-2.3342758797e-02, -1.8507636718e-02],
            &[3.7969820455e-01],
        ],
    ],
    density_t: [
        &[
            &[6.5025362670e-01, -1.6320471316, 2.0442606277, -1.4222011580, 4.4204535285e-01, -4.7983755488e-02],
            &[-1.8537085208, 3.0774129064, -3.0181275750, 1.4565010626, -2.7361846369e-01],
            &[1.6246342147, -2.5086831352, 1.4787808849, -2.3807209899e-01],
            &[-8.3627885467e-01, 1.1311538584, -5.3563304045e-01],
            &[6.7560904739e-02, 6.0212475204e-02],
            &[-2.8625353332e-02],
        ],
        &[
            &[-3.3340752782e-01, -1.1217528644e-01, 1.2510649515e-01, -1.6349760916e-02],
            &[3.3540239801e-01, 1.7531540640e-01, -9.3976864980e-02],
            &[-1.8487252150e-01, -4.1307825959e-02],
            &[5.5927935970e-02],
        ],
        &[
            &[5.1410778747e-02, -5.3278413795e-03],
            &[-6.2099915130e-02],
        ],
        &[
            &[9.4924551137e-03],
        ],
    ],
    density_s: [
        &[
            &[1.0783203594e+01, -4.4452095909e+01, 7.6048755821e+01, -6.3944280667e+01, 2.6890441098e+01, -4.5221697773],
            &[-8.1219372432e-01, 2.0346663041, -2.1232895170, 8.7994140486e-01, -1.1939638360e-01],
            &[7.6574242289e-01, -1.5019813020, 1.0872489522, -2.7233429080e-01],
            &[-4.1615152308e-01, 4.9061350869e-01, -1.1847737788e-01],
            &[1.4073062708e-01, -1.3327978879e-01],
            &[5.9929880135e-03],
        ],
        &[
            &[-5.2937873009e-01, 1.2634116779, -1.1547328025, 3.2870876279e-01],
            &[-5.5824407214e-02, 1.2451933313e-01, -2.4409539932e-02],
            &[4.3623149752e-02, -4.6767901790e-02],
            &[-6.8523260060e-03],
        ],
        &[
            &[-6.1618945251e-02, 6.2255521645e-02],
            &[-2.6514181170e-03],
        ],
        &[
            &[-2.3025968587e-04],
        ],
    ],
    reference: REFERENCE_PROFILE,
};




pub static EOS80: Polynomial = Polynomial {
    rdelta_s: 20.0,
    r1_s0: 1.0 / 40.0,
    r1_t0: 1.0 / 40.0,
    r1_z0: 1.0e-4,
    density: [
        &[
            &[9.5356891948e+02, 1.7136499189e+02, -3.7501039454e+02, 5.1856810420e+02, -3.7264470465e+02, 1.4302533998e+02, -2.2856621162e+01],
            &[1.0087518651e+01, -1.3647741861e+01, 8.8478359933, -7.2329388377, 1.4774410611, 2.0036720553e-01],
            &[-2.5579830599e+01, 2.4043512327e+01, -1.6807503990e+01, 8.3811577084, -1.9771060192],
            &[1.6846451198e+01, -2.1482926901e+01, 1.0108954054e+01, -6.2675951440e-01],
            &[-8.0812310102, 1.0102374985e+01, -4.8340368631],
            &[1.2079167803, 1.1515380987e-01],
            &[-2.4520288837e-01],
        ],
        &[
            &[1.0748601068e+01, -1.7817043500e+01, 2.2181366768e+01, -1.6750916338e+01, 4.1202230403],
            &[-1.5852644587e+01, -7.6639383522e-01, 4.1144627302, -6.6955877448e-01],
            &[9.9994861860, -1.9467067787e-01, -1.2177554330],
            &[-3.4866102017, 2.2229155620e-01],
            &[5.9503008642e-01],
        ],
        &[
            &[1.0375676547, -3.4249470629, 2.0542026429],
            &[2.1836324814, -3.4453674320e-01],
            &[-1.2548163097],
        ],
        &[
            &[1.8729078427e-02, -5.7238495240e-02],
            &[3.8306136687e-01],
        ],
    ],
    density_t: [
        &[
            &[2.5218796628e-01, -3.4119354653e-01, 2.2119589983e-01, -1.8082347094e-01, 3.6936026527e-02, 5.0091801383e-03],
            &[-1.2789915300, 1.2021756163, -8.4037519950e-01, 4.1905788542e-01, -9.8855300960e-02],
            &[1.2634838398, -1.6112195176, 7.5817155405e-01, -4.7006963580e-02],
            &[-8.0812310102e-01, 1.0102374985, -4.8340368631e-01],
            &[1.5098959754e-01, 1.4394226234e-02],
            &[-3.6780433255e-02],
        ],
        &[
            &[-3.9631611467e-01, -1.9159845881e-02, 1.0286156825e-01, -1.6738969362e-02],
            &[4.9997430930e-01, -9.7335338935e-03, -6.0887771650e-02],
            &[-2.6149576513e-01, 1.6671866715e-02],
            &[5.9503008642e-02],
        ],
        &[
            &[5.4590812035e-02, -8.6134185800e-03],
            &[-6.2740815485e-02],
        ],
        &[
            &[9.5765341718e-03],
        ],
    ],
    density_s: [
        &[
            &[2.1420623986, -9.3752598635, 1.9446303907e+01, -1.8632235233e+01, 8.9390837488, -1.7142465872],
            &[-1.7059677326e-01, 2.2119589983e-01, -2.7123520641e-01, 7.3872053055e-02, 1.2522950346e-02],
            &[3.0054390409e-01, -4.2018759975e-01, 3.1429341406e-01, -9.8855300960e-02],
            &[-2.6853658626e-01, 2.5272385135e-01, -2.3503481790e-02],
            &[1.2627968731e-01, -1.2085092158e-01],
            &[1.4394226234e-03],
        ],
        &[
            &[-2.2271304375e-01, 5.5453416920e-01, -6.2815936268e-01, 2.0601115202e-01],
            &[-9.5799229403e-03, 1.0286156825e-01, -2.5108454043e-02],
            &[-2.4333834734e-03, -3.0443885825e-02],
            &[2.7786444525e-03],
        ],
        &[
            &[-4.2811838286e-02, 5.1355066073e-02],
            &[-4.3067092900e-03],
        ],
        &[
            &[-7.1548119050e-04],
        ],
    ],
    reference: REFERENCE_PROFILE,
};
