use candle_core::{Result, Tensor};

use crate::config::LossConfig;

impl LossConfig {
    /// Mean absolute error between `predicted` and `target`, scaled by `l1`.
    pub fn weighted_l1(&self, predicted: &Tensor, target: &Tensor) -> Result<Tensor> {
        (predicted - target)?.abs()?.mean_all()?.affine(self.l1, 0.)
    }
}

#[cfg(test)]
mod tests {
    use candle_core::Device;

    use super::*;

    #[test]
    fn test_weighted_l1() {
        let device = Device::Cpu;
        let predicted = Tensor::new(&[[1f32, 2.], [3., 4.]], &device).unwrap();
        let target = Tensor::new(&[[0f32, 2.], [5., 4.]], &device).unwrap();

        let loss = LossConfig { l1: 0.5 }.weighted_l1(&predicted, &target).unwrap();
        // mean(|[1, 0, -2, 0]|) = 0.75
        assert_eq!(loss.to_scalar::<f32>().unwrap(), 0.375);

        let loss = LossConfig { l1: 0. }.weighted_l1(&predicted, &target).unwrap();
        assert_eq!(loss.to_scalar::<f32>().unwrap(), 0.);
    }
}
