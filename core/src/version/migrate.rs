use std::io::{Read, Write};

use crate::dts::Discriminator;
use crate::types::{DvsError, Fault};
use crate::version::types::{MigrationVersion, Version};

impl<T, V> MigrationVersion<V> for Version<T, V>
where
    T: 'static,
    V: 'static,
{
    fn discriminator(&self) -> Discriminator {
        self.dts.discriminator()
    }

    fn historical_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn downgrade_and_encode(&self, v: &V, w: &mut dyn Write) -> Result<usize, Fault> {
        let t = (self.downgrade)(v).map_err(DvsError::Migration)?;
        self.dts.marshal(&t, w)
    }

    fn decode_and_upgrade(&self, r: &mut dyn Read) -> Result<(V, usize), Fault> {
        let (t, n) = self.dts.unmarshal_data(r)?;
        let v = (self.upgrade)(t).map_err(|e| Fault::new(n, DvsError::Migration(e)))?;
        Ok((v, n))
    }

    fn downgrade_and_size(&self, v: &V) -> Result<usize, DvsError> {
        let t = (self.downgrade)(v).map_err(DvsError::Migration)?;
        Ok(self.dts.size(&t))
    }
}
